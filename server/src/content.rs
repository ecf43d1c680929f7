//! Review/FAQ payload loaded once at startup.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed file is not fatal: the host logs it and serves
//! `/content.json` as 404, and the page renders without reviews or FAQ.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::path::{Path, PathBuf};

use halawah_client::state::content::{ContentPayload, MAX_RATING};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid content payload: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load(path: &Path) -> Result<ContentPayload, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read { path: path.to_owned(), source })?;
    Ok(ContentPayload::from_json(&raw)?)
}

/// Problems worth logging that do not prevent serving the payload.
pub fn warnings(payload: &ContentPayload) -> Vec<String> {
    let mut out = Vec::new();
    for (lang, reviews) in [("en", &payload.reviews), ("ar", &payload.reviews_ar)] {
        for review in reviews.iter().filter(|r| r.rating == 0 || r.rating > MAX_RATING) {
            out.push(format!("{lang} review by {:?} has rating {} outside 1..={MAX_RATING}", review.name, review.rating));
        }
    }
    if payload.reviews.len() != payload.reviews_ar.len() {
        out.push(format!(
            "review lists differ in length: {} en, {} ar",
            payload.reviews.len(),
            payload.reviews_ar.len()
        ));
    }
    if payload.faq.len() != payload.faq_ar.len() {
        out.push(format!("faq lists differ in length: {} en, {} ar", payload.faq.len(), payload.faq_ar.len()));
    }
    out
}

/// Load the payload, logging the outcome. `None` when unavailable.
pub fn load_or_warn(path: &Path) -> Option<ContentPayload> {
    match load(path) {
        Ok(payload) => {
            for warning in warnings(&payload) {
                tracing::warn!(path = %path.display(), "{warning}");
            }
            tracing::info!(
                path = %path.display(),
                reviews = payload.reviews.len(),
                faq = payload.faq.len(),
                "content loaded"
            );
            Some(payload)
        }
        Err(e) => {
            tracing::warn!(error = %e, "content unavailable; reviews and FAQ disabled");
            None
        }
    }
}
