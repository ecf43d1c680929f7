use super::*;

#[test]
fn variant_parse_accepts_known_names() {
    assert_eq!(Variant::parse("extended"), Some(Variant::Extended));
    assert_eq!(Variant::parse(" Simplified "), Some(Variant::Simplified));
    assert_eq!(Variant::parse("full"), None);
    assert_eq!(Variant::parse(""), None);
}

#[test]
fn variant_as_str_matches_parse() {
    for variant in [Variant::Extended, Variant::Simplified] {
        assert_eq!(Variant::parse(variant.as_str()), Some(variant));
    }
}

#[test]
fn default_features_are_extended() {
    assert_eq!(SiteFeatures::default(), SiteFeatures::extended());
    assert_eq!(Variant::default().features(), SiteFeatures::extended());
}

#[test]
fn extended_features_enable_booking_extras() {
    let f = SiteFeatures::extended();
    assert_eq!(f.theme_control, ThemeControl::Cycle);
    assert!(f.enable_meal_time);
    assert!(f.enable_scarcity_badge);
    assert!(!f.enable_month_navigation);
    assert_eq!(f.name_min_words, 3);
    assert!(f.enable_payment);
    assert!(f.enable_faq_list_toggle);
}

#[test]
fn simplified_features_enable_navigation_only() {
    let f = SiteFeatures::simplified();
    assert_eq!(f.variant, Variant::Simplified);
    assert_eq!(f.theme_control, ThemeControl::Direct);
    assert!(!f.enable_meal_time);
    assert!(!f.enable_scarcity_badge);
    assert!(f.enable_month_navigation);
    assert_eq!(f.name_min_words, 1);
    assert!(!f.enable_price_preview);
    assert!(!f.enable_payment);
}

#[test]
fn detect_without_context_or_browser_falls_back_to_extended() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        assert_eq!(SiteFeatures::detect(), SiteFeatures::extended());
    });
}
