//! # client
//!
//! Leptos + WASM frontend for the survey application.
//!
//! This crate contains pages, components, session/theme state, the REST API
//! helpers, form validation, and the translation of API error responses into
//! user-facing alert messages. It is compiled with `hydrate` for the browser
//! bundle and with `ssr` when linked into the server binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
