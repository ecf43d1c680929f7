//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`calendar`, `reservation`, `faq`, etc.) so
//! each component depends on a small focused model. `site` composes them
//! into the single value held in context and owns command dispatch.

pub mod calendar;
pub mod carousel;
pub mod content;
pub mod faq;
pub mod payment;
pub mod prefs;
pub mod reservation;
pub mod site;
pub mod theme;
pub mod ui;
pub mod validation;
