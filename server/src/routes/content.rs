//! `GET /content.json`: the bilingual review/FAQ payload.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use halawah_client::state::content::ContentPayload;

use crate::state::AppState;

/// Serve the payload loaded at startup, or 404 when none loaded.
pub async fn content_json(State(state): State<AppState>) -> Result<Json<ContentPayload>, StatusCode> {
    state
        .content
        .as_deref()
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
