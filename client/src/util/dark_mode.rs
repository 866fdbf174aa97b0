//! Theme initialization and toggle.
//!
//! Reads the user's theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back to `localStorage`
//! and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;
use crate::util::persistence;

pub const STORAGE_KEY: &str = "thesurvey_theme";

/// Read the stored theme.
///
/// Falls back to the system `prefers-color-scheme` when nothing is stored,
/// and to [`Theme::Light`] outside the browser.
pub fn read_preference() -> Theme {
    if let Some(theme) = persistence::load_raw(STORAGE_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it, and persist the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persistence::save_raw(STORAGE_KEY, next.as_str());
    next
}
