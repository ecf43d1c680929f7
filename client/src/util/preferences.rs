//! Theme and language persistence plus document-level application.
//!
//! Reads both preferences from `localStorage` and applies them to the
//! `<html>` element: `data-theme` for the theme, `dir` and `lang` for the
//! language. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::i18n::Language;
use crate::state::prefs::Preferences;
use crate::state::theme::Theme;

pub const THEME_KEY: &str = "halawah-theme";
pub const LANGUAGE_KEY: &str = "halawah-language";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn html_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

/// Read both preferences. Missing storage or values yield the defaults.
pub fn load() -> Preferences {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return Preferences::default();
        };
        let theme = storage.get_item(THEME_KEY).ok().flatten();
        let language = storage.get_item(LANGUAGE_KEY).ok().flatten();
        Preferences::from_stored(theme.as_deref(), language.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Preferences::default()
    }
}

/// Write both preferences as independent entries.
pub fn save(prefs: Preferences) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            leptos::logging::warn!("localStorage unavailable; preferences not saved");
            return;
        };
        let _ = storage.set_item(THEME_KEY, prefs.theme.as_str());
        let _ = storage.set_item(LANGUAGE_KEY, prefs.language.code());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = html_element() {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `dir` and `lang` on the `<html>` element.
pub fn apply_language(lang: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = html_element() {
            let _ = el.set_attribute("dir", lang.dir());
            let _ = el.set_attribute("lang", lang.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}
