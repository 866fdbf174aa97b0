use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_without_transition() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.transition_enabled);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_known_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_toggled_alternates() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}
