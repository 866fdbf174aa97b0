use super::*;

// =============================================================
// SessionState defaults and actions
// =============================================================

#[test]
fn session_default_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_login);
    assert!(!state.is_sub_page_open);
}

#[test]
fn set_login_updates_flag() {
    let mut state = SessionState::default();
    state.set_login(true);
    assert!(state.is_login);
    state.set_login(false);
    assert!(!state.is_login);
}

#[test]
fn toggle_sub_page_flips_menu() {
    let mut state = SessionState::default();
    state.toggle_sub_page();
    assert!(state.is_sub_page_open);
    state.toggle_sub_page();
    assert!(!state.is_sub_page_open);
    state.set_sub_page_open(true);
    assert!(state.is_sub_page_open);
}

#[test]
fn logout_clears_both_flags() {
    let mut state = SessionState { is_login: true, is_sub_page_open: true };
    state.logout();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Persistence format
// =============================================================

#[test]
fn session_serializes_camel_case() {
    let state = SessionState { is_login: true, is_sub_page_open: false };
    assert_eq!(
        serde_json::to_value(state).unwrap(),
        serde_json::json!({ "isLogin": true, "isSubPageOpen": false })
    );
}

#[test]
fn session_deserializes_partial_payload() {
    let state: SessionState = serde_json::from_str(r#"{"isLogin":true}"#).unwrap();
    assert!(state.is_login);
    assert!(!state.is_sub_page_open);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_storage_is_logged_out() {
    assert_eq!(SessionState::load(), SessionState::default());
}
