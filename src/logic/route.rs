//! Route guarding
//!
//! The only authorization signal the client has is whether a credential is
//! present. Every navigation (and every session change) goes through
//! [`resolve`] to find the screen that is actually allowed.

/// Screens reachable in the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    PollList,
    CreatePoll,
}

impl Route {
    /// Screens that require a credential
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::PollList | Route::CreatePoll)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Log in",
            Route::Register => "Register",
            Route::PollList => "Polls",
            Route::CreatePoll => "Create Poll",
        }
    }
}

/// Resolve a navigation target against the session state
///
/// # Examples
/// ```
/// use polltui::logic::route::{resolve, Route};
///
/// assert_eq!(resolve(Route::PollList, false), Route::Login);
/// assert_eq!(resolve(Route::Register, true), Route::PollList);
/// assert_eq!(resolve(Route::CreatePoll, true), Route::CreatePoll);
/// ```
pub fn resolve(target: Route, authenticated: bool) -> Route {
    match (target.requires_auth(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::PollList,
        _ => target,
    }
}
