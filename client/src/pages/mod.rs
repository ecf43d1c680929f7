//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single landing page; each page composes section
//! components from `components`.

pub mod home;
