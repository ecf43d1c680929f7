//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site makes one request: the static content payload. Reservations are
//! acknowledged locally and never leave the browser.

pub mod content;
