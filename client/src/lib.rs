//! # halawah-client
//!
//! Leptos + WASM frontend for the Halawah restaurant site: a bilingual
//! (English/Arabic) landing page with a date-gated reservation wizard,
//! theme switching, a review carousel, and an FAQ accordion.
//!
//! Behavior lives in `state` as plain Rust, exercised natively by the unit
//! tests; `components` render it and `util` performs the browser work the
//! state asks for.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
