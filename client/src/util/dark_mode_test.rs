#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
