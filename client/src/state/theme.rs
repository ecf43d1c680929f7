//! Visual theme model.
//!
//! The active theme is written as `data-theme` on `<html>` and consumed by
//! the stylesheet. The cycle control previews the theme the next click will
//! apply rather than the current one.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Grey,
}

impl Theme {
    /// Cycle order for the single-button control.
    pub const CYCLE: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Grey];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Grey => "grey",
        }
    }

    /// Parse a stored theme name. Unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "grey" => Some(Self::Grey),
            _ => None,
        }
    }

    /// Theme one step ahead in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Grey,
            Self::Grey => Self::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::Grey => "⚫",
        }
    }

    /// Icon shown on the cycle button: the theme a click would switch to.
    pub fn preview_icon(self) -> &'static str {
        self.next().icon()
    }

    pub fn label(self) -> crate::i18n::Bilingual {
        match self {
            Self::Light => crate::i18n::THEME_LIGHT,
            Self::Dark => crate::i18n::THEME_DARK,
            Self::Grey => crate::i18n::THEME_GREY,
        }
    }
}
