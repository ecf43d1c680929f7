//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after startup: the active variant's features and the
//! content payload, if one loaded.

use std::sync::Arc;

use halawah_client::config::SiteFeatures;
use halawah_client::state::content::ContentPayload;

#[derive(Clone)]
pub struct AppState {
    pub features: SiteFeatures,
    pub content: Option<Arc<ContentPayload>>,
}

impl AppState {
    pub fn new(features: SiteFeatures, content: Option<ContentPayload>) -> Self {
        Self { features, content: content.map(Arc::new) }
    }
}
