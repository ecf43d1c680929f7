//! Site variant configuration.
//!
//! DESIGN
//! ======
//! The site ships in two variants (an extended one with meal times, payment
//! and scarcity badges, and a simplified one with month navigation and direct
//! theme buttons). Both run through the same components; every behavioral
//! difference is a field on [`SiteFeatures`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag that carries the active variant from the host to
/// the hydrating client.
pub const VARIANT_META_NAME: &str = "halawah-variant";

/// Named site variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Extended,
    Simplified,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Simplified => "simplified",
        }
    }

    /// Parse a variant name; surrounding whitespace and case are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "extended" => Some(Self::Extended),
            "simplified" => Some(Self::Simplified),
            _ => None,
        }
    }

    pub fn features(self) -> SiteFeatures {
        match self {
            Self::Extended => SiteFeatures::extended(),
            Self::Simplified => SiteFeatures::simplified(),
        }
    }
}

/// How the theme control behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeControl {
    /// One button cycling light → dark → grey, showing the next theme's icon.
    Cycle,
    /// One button per theme.
    Direct,
}

/// Feature flags distinguishing the two site variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteFeatures {
    pub variant: Variant,
    pub theme_control: ThemeControl,
    pub enable_meal_time: bool,
    pub enable_scarcity_badge: bool,
    pub enable_month_navigation: bool,
    /// Minimum whitespace-separated tokens in the full name (1 = non-empty).
    pub name_min_words: usize,
    pub enable_price_preview: bool,
    pub enable_payment: bool,
    pub enable_faq_list_toggle: bool,
}

impl SiteFeatures {
    pub fn extended() -> Self {
        Self {
            variant: Variant::Extended,
            theme_control: ThemeControl::Cycle,
            enable_meal_time: true,
            enable_scarcity_badge: true,
            enable_month_navigation: false,
            name_min_words: 3,
            enable_price_preview: true,
            enable_payment: true,
            enable_faq_list_toggle: true,
        }
    }

    pub fn simplified() -> Self {
        Self {
            variant: Variant::Simplified,
            theme_control: ThemeControl::Direct,
            enable_meal_time: false,
            enable_scarcity_badge: false,
            enable_month_navigation: true,
            name_min_words: 1,
            enable_price_preview: false,
            enable_payment: false,
            enable_faq_list_toggle: false,
        }
    }

    /// Resolve the features for the current render.
    ///
    /// On the server the host provides them through context. In the browser
    /// the variant is read back from the `<meta>` tag the host rendered.
    pub fn detect() -> Self {
        if let Some(features) = leptos::prelude::use_context::<SiteFeatures>() {
            return features;
        }
        crate::util::dom::read_meta(VARIANT_META_NAME)
            .and_then(|raw| Variant::parse(&raw))
            .unwrap_or_default()
            .features()
    }
}

impl Default for SiteFeatures {
    fn default() -> Self {
        Self::extended()
    }
}
