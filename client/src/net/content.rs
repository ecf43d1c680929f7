//! Content payload fetch.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): returns `None`; reviews and FAQ fill in after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed payload disables the review and FAQ renderers
//! without failing the page; the reason is logged to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::content::ContentPayload;

#[cfg(any(test, feature = "hydrate"))]
fn content_failed_message(status: u16) -> String {
    format!("content request failed: {status}")
}

/// Fetch the bilingual content payload from `path`.
pub async fn fetch_content(path: &str) -> Option<ContentPayload> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(path).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("content request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            leptos::logging::warn!("{}", content_failed_message(resp.status()));
            return None;
        }
        match resp.json::<ContentPayload>().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                leptos::logging::warn!("content payload invalid: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        None
    }
}
