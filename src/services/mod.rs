//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background request service for the poll backend
//! - session_watch: Filesystem watcher for the shared credential file

pub mod api;
pub mod session_watch;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
