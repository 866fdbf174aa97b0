//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::provide_session;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, restores the saved theme, and sets
/// up client-side routing below the persistent header.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_session();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Restore the theme once mounted; SSR always renders the light theme.
    Effect::new(move |_| {
        let theme = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/thesurvey.css"/>
        <Title text="The Survey"/>

        <Router>
            <Header/>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
