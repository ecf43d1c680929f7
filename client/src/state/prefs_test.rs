use super::*;

#[test]
fn missing_values_fall_back_to_defaults() {
    let prefs = Preferences::from_stored(None, None);
    assert_eq!(prefs.theme, Theme::Grey);
    assert_eq!(prefs.language, Language::En);
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn stored_values_are_restored() {
    let prefs = Preferences::from_stored(Some("dark"), Some("ar"));
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.language, Language::Ar);
}

#[test]
fn invalid_values_fall_back_independently() {
    let prefs = Preferences::from_stored(Some("neon"), Some("ar"));
    assert_eq!(prefs.theme, Theme::Grey);
    assert_eq!(prefs.language, Language::Ar);

    let prefs = Preferences::from_stored(Some("light"), Some("de"));
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(prefs.language, Language::En);
}
