//! Persistent top header: logo, section navigators, theme toggle, and the
//! login button or user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet, so it reads the current location to
//! decide which controls are active and reads the session signal to choose
//! between the login button and the user avatar.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::state::ui::{Theme, UiState};

/// Section navigators are only clickable on the home route.
pub fn navigators_enabled(pathname: &str) -> bool {
    pathname == "/"
}

/// The profile save shortcut is only offered on the my-page route.
pub fn shows_save_profile(pathname: &str) -> bool {
    pathname == "/mypage"
}

fn logo_src(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "/assets/logo-light.svg",
        Theme::Dark => "/assets/logo-dark.svg",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let pathname = location.pathname;
    let nav_enabled = move || navigators_enabled(&pathname.get());

    let go = move |route: &'static str| navigate(route, NavigateOptions::default());

    let on_theme_toggle = move |_: MouseEvent| {
        ui.update(|u| {
            u.transition_enabled = true;
            u.theme = crate::util::dark_mode::toggle(u.theme);
        });
    };

    let go_my_page = {
        let go = go.clone();
        move |_: MouseEvent| {
            go("/mypage");
            session.update(SessionState::toggle_sub_page);
        }
    };

    let on_logout = {
        let go = go.clone();
        move |_: MouseEvent| {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(crate::net::api::logout());
            session.update(SessionState::logout);
            go("/login");
        }
    };

    let go_home = go.clone();
    let go_home_favicon = go.clone();
    let go_survey = go.clone();
    let go_report = go.clone();
    let go_save_profile = go.clone();
    let go_login = go;

    view! {
        <header
            class="header"
            class:header--transition=move || ui.get().transition_enabled
        >
            <img
                class="header__logo"
                src=move || logo_src(ui.get().theme)
                alt="logo"
                title="logo"
                on:click=move |_| go_home("/")
            />
            <img
                class="header__favicon"
                src="/assets/favicon.svg"
                alt="logo"
                title="logo"
                on:click=move |_| go_home_favicon("/")
            />

            <ul class="header__navigators">
                <li
                    class="header__navigator"
                    class:header__navigator--active=nav_enabled
                    on:click=move |_| {
                        if nav_enabled() {
                            go_survey("/survey");
                        }
                    }
                >
                    "설문"
                </li>
                <li
                    class="header__navigator"
                    class:header__navigator--active=nav_enabled
                    on:click=move |_| {
                        if nav_enabled() {
                            go_report("/report");
                        }
                    }
                >
                    "리포트"
                </li>
            </ul>

            <div class="header__buttons">
                <label class="theme-toggle" title="Toggle theme">
                    <input
                        id="theme-toggle"
                        class="theme-toggle__input"
                        type="checkbox"
                        prop:checked=move || ui.get().theme == Theme::Dark
                        on:click=on_theme_toggle
                    />
                    <span class="theme-toggle__slider" data-theme=move || ui.get().theme.as_str()></span>
                </label>

                <Show when=move || shows_save_profile(&pathname.get())>
                    <button
                        class="header__save-profile"
                        on:click={
                            let go = go_save_profile.clone();
                            move |_| go("/mypage")
                        }
                    >
                        "개인정보 저장하기"
                    </button>
                </Show>

                <Show
                    when=move || session.get().is_login
                    fallback={
                        let go_login = go_login.clone();
                        move || {
                            let go_login = go_login.clone();
                            view! {
                                <button class="header__login" on:click=move |_| go_login("/login")>
                                    "로그인/회원가입"
                                </button>
                            }
                        }
                    }
                >
                    <img
                        class="header__user-image"
                        src="/assets/user-basic.svg"
                        alt="user"
                        on:click=move |_| session.update(SessionState::toggle_sub_page)
                    />
                </Show>
            </div>

            <Show when=move || session.get().is_sub_page_open>
                <div class="header__sub-page">
                    <button class="header__sub-page-button" on:click=go_my_page.clone()>
                        "마이페이지"
                    </button>
                    <button class="header__sub-page-button" on:click=on_logout.clone()>
                        "로그아웃"
                    </button>
                </div>
            </Show>
        </header>
    }
}
