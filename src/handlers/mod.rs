//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Responses from the background API service
//! - events: Session changes (login, logout, or another instance's credential edits)
//! - keyboard: User keyboard input
//!
//! Handlers are free functions that take `&mut App` and process one event.

pub mod api;
pub mod events;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use events::handle_session_change;
pub use keyboard::handle_key;
