//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections. They read the site state through the
//! `SiteHandle` context and report user actions as `Command`s; none of them
//! mutate state directly.

pub mod calendar;
pub mod faq;
pub mod footer;
pub mod header;
pub mod hero;
pub mod payment;
pub mod reservation;
pub mod reviews;
pub mod text;
