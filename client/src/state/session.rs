//! Login session flags shared by the header and the auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend keeps the real session in a cookie; this state only mirrors
//! whether the browser believes it is logged in so the header can render the
//! right controls. It is persisted to `localStorage` so a reload does not
//! reset it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::persistence;

/// `localStorage` key holding the serialized [`SessionState`].
pub const STORAGE_KEY: &str = "thesurvey_session";

/// Login flag plus the open/closed state of the header user menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub is_login: bool,
    pub is_sub_page_open: bool,
}

impl SessionState {
    pub fn set_login(&mut self, is_login: bool) {
        self.is_login = is_login;
    }

    pub fn set_sub_page_open(&mut self, open: bool) {
        self.is_sub_page_open = open;
    }

    pub fn toggle_sub_page(&mut self) {
        self.is_sub_page_open = !self.is_sub_page_open;
    }

    /// Clear the login flag and close the user menu.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Restore the persisted state, or the logged-out default.
    pub fn load() -> Self {
        persistence::load_json(STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        persistence::save_json(STORAGE_KEY, self);
    }
}

/// Create the session signal and keep `localStorage` in sync with it.
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Restore after mount so SSR and the first hydrated render agree, then
    // persist every later change.
    Effect::new(move |restored: Option<()>| {
        session.track();
        if restored.is_none() {
            session.set(SessionState::load());
        } else {
            session.get_untracked().save();
        }
    });

    session
}
