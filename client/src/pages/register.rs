//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every field is checked on blur and again on submit. The API is only called
//! once all checks pass; a successful registration sends the user to the
//! login page through the alert action.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::alert_modal::{Alert, AlertModal};
use crate::components::form_field::FormField;
use crate::net::types::UserRegisterRequest;
use crate::state::session::SessionState;
use crate::util::response_error::handle_response_error;
use crate::util::validation::{FieldError, check_confirm_password, check_email, check_password, check_required};

pub const REGISTER_ALERT_TITLE: &str = "회원가입 알림";
pub const REGISTER_ERROR_TITLE: &str = "회원가입 오류";
pub const PASSWORD_MATCH_MESSAGE: &str = "비밀번호가 일치합니다!";
pub const INVALID_FORM_MESSAGE: &str = "입력한 정보를 다시 확인해주세요.";
pub const REGISTERED_MESSAGE: &str = "회원가입이 완료되었습니다.";

/// Raw register form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone_number: String,
}

/// Per-field validation flags for [`RegisterForm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
    pub name: Option<FieldError>,
    pub phone_number: Option<FieldError>,
}

impl RegisterErrors {
    pub fn check(form: &RegisterForm) -> Self {
        Self {
            email: check_email(&form.email),
            password: check_password(&form.password),
            confirm_password: check_confirm_password(&form.password, &form.confirm_password),
            name: check_required(&form.name),
            phone_number: check_required(&form.phone_number),
        }
    }

    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Validate the whole form, producing the API request or the field flags.
pub fn validate_register_form(form: &RegisterForm) -> Result<UserRegisterRequest, RegisterErrors> {
    let errors = RegisterErrors::check(form);
    if !errors.is_clean() {
        return Err(errors);
    }
    Ok(UserRegisterRequest {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        phone_number: form.phone_number.trim().to_owned(),
    })
}

/// Alert for the "비밀번호 확인" button.
pub fn password_confirmation_alert(password: &str, confirm_password: &str) -> Alert {
    let message = match check_confirm_password(password, confirm_password) {
        None if !password.is_empty() => PASSWORD_MATCH_MESSAGE,
        None => FieldError::Required.message(),
        Some(err) => err.message(),
    };
    Alert::info(REGISTER_ALERT_TITLE, message)
}

fn registered_alert() -> Alert {
    Alert {
        title: REGISTER_ALERT_TITLE.to_owned(),
        message: REGISTERED_MESSAGE.to_owned(),
        button_text: "로그인 하러 가기".to_owned(),
        route: "/login".to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let alert = RwSignal::new(None::<Alert>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_form(&form.get_untracked()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                alert.set(Some(Alert::info(REGISTER_ERROR_TITLE, INVALID_FORM_MESSAGE)));
                return;
            }
        };
        errors.set(RegisterErrors::default());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(user) => {
                    leptos::logging::log!("registered {}", user.email);
                    form.set(RegisterForm::default());
                    alert.set(Some(registered_alert()));
                }
                Err(e) => {
                    let classified = handle_response_error(&e, session);
                    alert.set(Some(Alert::from_classification(REGISTER_ERROR_TITLE, classified)));
                }
            }
            busy.set(false);
        });
    };

    let on_confirm_password = move |_| {
        let current = form.get_untracked();
        alert.set(Some(password_confirmation_alert(&current.password, &current.confirm_password)));
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"회원가입"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="이메일"
                        name="email"
                        input_type="email"
                        placeholder="user@example.com"
                        value=Signal::derive(move || form.get().email)
                        error=Signal::derive(move || errors.get().email)
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                        on_blur=Callback::new(move |()| {
                            let found = check_email(&form.get_untracked().email);
                            errors.update(|e| e.email = found);
                        })
                    />
                    <FormField
                        label="비밀번호"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || form.get().password)
                        error=Signal::derive(move || errors.get().password)
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                        on_blur=Callback::new(move |()| {
                            let found = check_password(&form.get_untracked().password);
                            errors.update(|e| e.password = found);
                        })
                    />
                    <FormField
                        label="비밀번호 재입력"
                        name="confirmPassword"
                        input_type="password"
                        value=Signal::derive(move || form.get().confirm_password)
                        error=Signal::derive(move || errors.get().confirm_password)
                        on_input=Callback::new(move |v: String| form.update(|f| f.confirm_password = v))
                        on_blur=Callback::new(move |()| {
                            let current = form.get_untracked();
                            let found = check_confirm_password(&current.password, &current.confirm_password);
                            errors.update(|e| e.confirm_password = found);
                        })
                    />
                    <button class="auth-button" type="button" on:click=on_confirm_password>
                        "비밀번호 확인"
                    </button>
                    <FormField
                        label="이름"
                        name="name"
                        value=Signal::derive(move || form.get().name)
                        error=Signal::derive(move || errors.get().name)
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        on_blur=Callback::new(move |()| {
                            let found = check_required(&form.get_untracked().name);
                            errors.update(|e| e.name = found);
                        })
                    />
                    <FormField
                        label="전화번호"
                        name="phoneNumber"
                        input_type="tel"
                        placeholder="01012345678"
                        value=Signal::derive(move || form.get().phone_number)
                        error=Signal::derive(move || errors.get().phone_number)
                        on_input=Callback::new(move |v: String| form.update(|f| f.phone_number = v))
                        on_blur=Callback::new(move |()| {
                            let found = check_required(&form.get_untracked().phone_number);
                            errors.update(|e| e.phone_number = found);
                        })
                    />
                    <button class="auth-button auth-button--primary" type="submit" disabled=move || busy.get()>
                        "회원가입"
                    </button>
                </form>
            </div>
            <AlertModal alert=alert/>
        </div>
    }
}
