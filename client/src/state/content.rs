//! Externally supplied bilingual content: reviews and FAQ entries.
//!
//! The payload is read-only. Lists render in the order given, with no
//! filtering, sorting or pagination.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const MAX_RATING: u8 = 5;

/// Path the browser fetches the payload from.
pub const CONTENT_PATH: &str = "/content.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

impl Review {
    /// Filled then empty stars, five glyphs total.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// The four parallel lists of the content payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub reviews_ar: Vec<Review>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub faq_ar: Vec<FaqItem>,
}

impl ContentPayload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn reviews_for(&self, lang: Language) -> &[Review] {
        match lang {
            Language::En => &self.reviews,
            Language::Ar => &self.reviews_ar,
        }
    }

    pub fn faq_for(&self, lang: Language) -> &[FaqItem] {
        match lang {
            Language::En => &self.faq,
            Language::Ar => &self.faq_ar,
        }
    }
}
