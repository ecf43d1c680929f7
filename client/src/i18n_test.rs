use super::*;
use time::macros::date;

#[test]
fn language_direction_and_codes() {
    assert_eq!(Language::En.dir(), "ltr");
    assert_eq!(Language::Ar.dir(), "rtl");
    assert_eq!(Language::En.code(), "en");
    assert_eq!(Language::Ar.code(), "ar");
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn language_parse_rejects_unknown_codes() {
    assert_eq!(Language::parse("ar"), Some(Language::Ar));
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse("fr"), None);
    assert_eq!(Language::parse("AR"), None);
}

#[test]
fn switching_to_arabic_and_back_restores_every_english_label() {
    let original: Vec<&str> = ALL_LABELS.iter().map(|l| l.pick(Language::En)).collect();
    let arabic: Vec<&str> = ALL_LABELS.iter().map(|l| l.pick(Language::Ar)).collect();
    assert_eq!(arabic.len(), original.len());
    let restored: Vec<&str> = ALL_LABELS.iter().map(|l| l.pick(Language::En)).collect();
    assert_eq!(restored, original);
}

#[test]
fn every_label_has_both_halves() {
    for label in ALL_LABELS {
        assert!(!label.en.is_empty());
        assert!(!label.ar.is_empty());
    }
}

#[test]
fn weekday_headers_start_on_sunday() {
    assert_eq!(weekday_headers(Language::En)[0], "Sun");
    assert_eq!(weekday_headers(Language::En)[6], "Sat");
    assert_eq!(weekday_headers(Language::Ar)[0], "ح");
}

#[test]
fn month_caption_is_localized() {
    assert_eq!(month_caption(2026, Month::January, Language::En), "January 2026");
    assert_eq!(month_caption(2026, Month::January, Language::Ar), "يناير 2026");
    assert_eq!(month_name(Month::December, Language::En), "December");
}

#[test]
fn long_date_formats_per_locale() {
    let d = date!(2026 - 01 - 22);
    assert_eq!(format_long_date(d, Language::En), "Thursday, January 22, 2026");
    assert_eq!(format_long_date(d, Language::Ar), "الخميس، 22 يناير 2026");
}

#[test]
fn total_price_message_is_localized() {
    assert_eq!(format_total_price(60, Language::En), "Total Price: 60 JOD");
    assert_eq!(format_total_price(200, Language::Ar), "السعر الإجمالي: 200 دينار");
}
