use super::*;

#[test]
fn navigators_enabled_only_on_home() {
    assert!(navigators_enabled("/"));
    assert!(!navigators_enabled("/survey"));
    assert!(!navigators_enabled("/login"));
    assert!(!navigators_enabled(""));
}

#[test]
fn save_profile_shown_only_on_mypage() {
    assert!(shows_save_profile("/mypage"));
    assert!(!shows_save_profile("/mypage/auth-list"));
    assert!(!shows_save_profile("/"));
}

#[test]
fn logo_follows_theme() {
    assert_eq!(logo_src(Theme::Light), "/assets/logo-light.svg");
    assert_eq!(logo_src(Theme::Dark), "/assets/logo-dark.svg");
}
