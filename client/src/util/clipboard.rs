//! Clipboard access for the copy-link button.
//!
//! ERROR HANDLING
//! ==============
//! Clipboard writes are the one operation with an asynchronous outcome.
//! Failures (permission denied, insecure context, no window) come back as a
//! `String` reason for the caller to log and surface.

#![allow(clippy::unused_async)]

/// URL of the current page, if running in a browser.
pub fn page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard unavailable outside the browser".to_owned())
    }
}
