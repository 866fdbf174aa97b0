//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <main class="home-page">
            <h1 class="home-page__title">"The Survey"</h1>
            <p class="home-page__subtitle">"인증된 사용자와 함께하는 신뢰할 수 있는 설문"</p>
            <Show
                when=move || session.get().is_login
                fallback=|| view! { <a class="auth-button auth-button--primary" href="/login">"시작하기"</a> }
            >
                <a class="auth-button auth-button--primary" href="/survey">"설문 보러 가기"</a>
            </Show>
        </main>
    }
}
