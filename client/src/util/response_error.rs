//! Translation of failed API responses into alert content and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that call the API render failures through the alert modal. The
//! classification decides the modal text, the label of its action button,
//! and the route that button navigates to. An expired login additionally
//! clears the persisted session flag so the header falls back to its
//! logged-out state.

#[cfg(test)]
#[path = "response_error_test.rs"]
mod response_error_test;

use leptos::prelude::*;

use crate::net::types::ApiError;
use crate::state::session::SessionState;

/// 401 body the backend sends when a survey requires a certification the
/// user has not completed.
pub const CERTIFICATION_REQUIRED_BODY: &str = "설문조사에 필요한 인증을 하지 않았습니다.";

pub const SESSION_EXPIRED_LABEL: &str = "로그인이 만료 되었습니다.";
pub const SERVER_ERROR_LABEL: &str = "서버에 문제가 생겼습니다.";

pub const CERTIFY_BUTTON: &str = "인증 하러 가기";
pub const LOGIN_BUTTON: &str = "로그인 하러 가기";
pub const SURVEY_LIST_BUTTON: &str = "설문 리스트로 돌아가기";
pub const HOME_BUTTON: &str = "홈화면으로 돌아가기";

pub const CERTIFICATION_ROUTE: &str = "/mypage/auth-list";
pub const LOGIN_ROUTE: &str = "/login";
pub const SURVEY_ROUTE: &str = "/survey";
pub const HOME_ROUTE: &str = "/";

/// Alert content derived from a failed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorClassification {
    /// Message shown in the alert body.
    pub label: String,
    /// Action button text; empty means the alert has no action button.
    pub button_text: String,
    /// Route the action navigates to; empty means stay on the current page.
    pub route: String,
    /// Set when the session flag must be cleared.
    pub invalidates_session: bool,
}

impl ErrorClassification {
    fn new(label: impl Into<String>, button_text: &str, route: &str) -> Self {
        Self {
            label: label.into(),
            button_text: button_text.to_owned(),
            route: route.to_owned(),
            invalidates_session: false,
        }
    }

    /// The `(label, button, route)` triple.
    pub fn as_triple(&self) -> (&str, &str, &str) {
        (&self.label, &self.button_text, &self.route)
    }
}

/// Classify a failed response by status code and body text.
pub fn classify(status: u16, body: &str) -> ErrorClassification {
    match status {
        400 => ErrorClassification::new(body, "", ""),
        401 if body == CERTIFICATION_REQUIRED_BODY => {
            ErrorClassification::new(body, CERTIFY_BUTTON, CERTIFICATION_ROUTE)
        }
        401 => ErrorClassification {
            invalidates_session: true,
            ..ErrorClassification::new(SESSION_EXPIRED_LABEL, LOGIN_BUTTON, LOGIN_ROUTE)
        },
        403 => ErrorClassification::new(body, SURVEY_LIST_BUTTON, SURVEY_ROUTE),
        500 => ErrorClassification::new(SERVER_ERROR_LABEL, "", HOME_ROUTE),
        _ => ErrorClassification::new(body, HOME_BUTTON, HOME_ROUTE),
    }
}

/// Classify an [`ApiError`] and apply its session side effect.
///
/// A generic 401 logs the user out of the local session before the alert is
/// shown.
pub fn handle_response_error(error: &ApiError, session: RwSignal<SessionState>) -> ErrorClassification {
    let classified = classify(error.status, &error.body);
    if classified.invalidates_session {
        leptos::logging::log!("session expired (status {}), clearing login flag", error.status);
        session.update(SessionState::logout);
    }
    classified
}
