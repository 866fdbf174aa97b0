//! Login page with email + password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session flag is set and the user lands on the survey list.
//! Empty fields are caught locally and never reach the API; rejected
//! credentials and other failures are rendered through the alert modal.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_modal::{Alert, AlertModal};
use crate::components::form_field::FormField;
use crate::net::types::{ApiError, UserLoginRequest};
use crate::state::session::SessionState;
use crate::util::response_error::handle_response_error;
use crate::util::validation::{FieldError, check_email, check_required, is_blank};

pub const LOGIN_ERROR_TITLE: &str = "로그인 오류";
pub const EMPTY_CREDENTIALS_MESSAGE: &str = "이메일과 비밀번호를 모두 입력해주세요.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";

/// Route opened after a successful login.
pub const AFTER_LOGIN_ROUTE: &str = "/survey";

/// Check the login form before submitting.
///
/// Returns the request on success or the alert to show instead.
pub fn validate_login_input(email: &str, password: &str) -> Result<UserLoginRequest, Alert> {
    if is_blank(email) || is_blank(password) {
        return Err(Alert::info(LOGIN_ERROR_TITLE, EMPTY_CREDENTIALS_MESSAGE));
    }
    if let Some(err) = check_email(email) {
        return Err(Alert::info(LOGIN_ERROR_TITLE, err.message()));
    }
    Ok(UserLoginRequest { email: email.trim().to_owned(), password: password.to_owned() })
}

/// A 401 from the login endpoint means rejected credentials, not an expired
/// session, so it is reported in place instead of through the classifier.
pub fn rejected_credentials_alert(error: &ApiError) -> Option<Alert> {
    (error.status == 401).then(|| Alert::info(LOGIN_ERROR_TITLE, INVALID_CREDENTIALS_MESSAGE))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<FieldError>);
    let password_error = RwSignal::new(None::<FieldError>);
    let alert = RwSignal::new(None::<Alert>);
    let busy = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            email_error.set(check_email(&email_value));
            password_error.set(check_required(&password_value));

            let request = match validate_login_input(&email_value, &password_value) {
                Ok(request) => request,
                Err(rejected) => {
                    alert.set(Some(rejected));
                    return;
                }
            };
            busy.set(true);

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(user) => {
                        leptos::logging::log!("logged in as {}", user.email);
                        session.update(|s| {
                            s.set_login(true);
                            s.set_sub_page_open(false);
                        });
                        password.set(String::new());
                        navigate(AFTER_LOGIN_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        let shown = rejected_credentials_alert(&e).unwrap_or_else(|| {
                            Alert::from_classification(LOGIN_ERROR_TITLE, handle_response_error(&e, session))
                        });
                        alert.set(Some(shown));
                    }
                }
                busy.set(false);
            });
        }
    };

    let go_register = move |_| navigate("/register", NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"로그인"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="이메일"
                        name="email"
                        input_type="email"
                        placeholder="user@example.com"
                        value=email
                        error=email_error
                        on_input=Callback::new(move |v: String| email.set(v))
                        on_blur=Callback::new(move |()| email_error.set(check_email(&email.get_untracked())))
                    />
                    <FormField
                        label="비밀번호"
                        name="password"
                        input_type="password"
                        value=password
                        error=password_error
                        on_input=Callback::new(move |v: String| password.set(v))
                        on_blur=Callback::new(move |()| {
                            password_error.set(check_required(&password.get_untracked()));
                        })
                    />
                    <button class="auth-button auth-button--primary" type="submit" disabled=move || busy.get()>
                        "로그인"
                    </button>
                </form>
                <button class="auth-button" type="button" on:click=go_register>
                    "회원가입"
                </button>
            </div>
            <AlertModal alert=alert/>
        </div>
    }
}
