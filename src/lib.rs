//! Poll TUI Library
//!
//! A terminal client for a polling backend: log in, browse polls, vote,
//! create/edit/delete polls. Modules are exposed for the binary and for tests.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

pub use app::App;
