//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a backend:
//! - errors: Gateway error classification
//! - navigation: Selection and focus movement
//! - poll: Poll display rules and option filtering
//! - route: Route guarding against the session state
//! - ui: Toast timing and text input helpers

pub mod errors;
pub mod navigation;
pub mod poll;
pub mod route;
pub mod ui;
