//! Shared types for the Model

use thiserror::Error;

/// Client-side validation failures. These block a submission before any
/// request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A poll needs at least 2 non-empty options (found {found})")]
    TooFewOptions { found: usize },
    #[error("Title is required")]
    MissingTitle,
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Why a poll list fetch was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListReason {
    /// Entering the list screen
    Initial,
    /// User asked for a refresh
    Refresh,
    /// Authoritative counts after a vote
    AfterVote,
    AfterEdit,
    AfterDelete,
}
