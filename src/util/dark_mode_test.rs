#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!prefers_dark());
}

#[test]
fn current_is_light_outside_browser() {
    assert_eq!(current(), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn stylesheet_and_mode_attr_follow_theme() {
    assert_eq!(stylesheet_id(Theme::Dark), "highlightjs-dark-theme");
    assert_eq!(stylesheet_id(Theme::Light), "highlightjs-light-theme");
    assert_eq!(mode_only_attr(Theme::Dark), "data-dark-mode-only");
    assert_eq!(mode_only_attr(Theme::Light), "data-light-mode-only");
}
