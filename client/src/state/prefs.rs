//! Persisted visitor preferences (theme and language).

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::i18n::Language;
use crate::state::theme::Theme;

/// The two persisted preferences. Exactly one of each is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Build preferences from raw stored strings.
    ///
    /// Absent or unrecognized values fall back to the defaults (`grey`, `en`)
    /// independently of each other.
    pub fn from_stored(theme: Option<&str>, language: Option<&str>) -> Self {
        Self {
            theme: theme.and_then(Theme::parse).unwrap_or_default(),
            language: language.and_then(Language::parse).unwrap_or_default(),
        }
    }
}
