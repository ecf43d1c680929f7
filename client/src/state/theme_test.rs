use super::*;

#[test]
fn default_theme_is_grey() {
    assert_eq!(Theme::default(), Theme::Grey);
}

#[test]
fn cycle_visits_light_dark_grey_with_period_three() {
    let mut theme = Theme::Light;
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(theme);
        theme = theme.next();
    }
    assert_eq!(
        seen,
        vec![Theme::Light, Theme::Dark, Theme::Grey, Theme::Light, Theme::Dark, Theme::Grey]
    );
}

#[test]
fn preview_icon_matches_next_theme() {
    for theme in Theme::CYCLE {
        assert_eq!(theme.preview_icon(), theme.next().icon());
        assert_ne!(theme.preview_icon(), theme.icon());
    }
    assert_eq!(Theme::Grey.preview_icon(), "☀️");
}

#[test]
fn parse_round_trips_known_names_and_rejects_others() {
    for theme in Theme::CYCLE {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}
