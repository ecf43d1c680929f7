use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.variant, Variant::Extended);
    assert_eq!(cfg.content_path, PathBuf::from(DEFAULT_CONTENT_PATH));
}

#[test]
fn parses_overrides() {
    let cfg = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SITE_VARIANT", " Simplified "),
        ("CONTENT_PATH", "/srv/content.json"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.variant, Variant::Simplified);
    assert_eq!(cfg.content_path, PathBuf::from("/srv/content.json"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_VARIANT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.variant, Variant::Extended);
}

#[test]
fn rejects_bad_port() {
    let err = SiteConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn rejects_unknown_variant() {
    let err = SiteConfig::from_lookup(lookup(&[("SITE_VARIANT", "deluxe")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownVariant("deluxe".to_owned()));
    assert!(err.to_string().contains("deluxe"));
}
