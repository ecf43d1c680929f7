#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_returns_defaults_in_non_hydrate_tests() {
    let prefs = load();
    assert_eq!(prefs.theme, Theme::Grey);
    assert_eq!(prefs.language, Language::En);
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(THEME_KEY, LANGUAGE_KEY);
}

#[test]
fn apply_and_save_are_noops_but_callable() {
    apply_theme(Theme::Dark);
    apply_language(Language::Ar);
    save(Preferences::default());
}
