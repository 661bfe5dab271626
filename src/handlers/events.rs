//! Session Event Handler
//!
//! Reacts to the authenticated flag changing, whether from this instance's
//! login/logout or from another instance editing the credential file.

use crate::App;

/// Apply a change of the session's authenticated flag
///
/// The current screen is re-checked against the route guard, so losing the
/// credential while on a protected screen lands on the login screen.
pub fn handle_session_change(app: &mut App, authenticated: bool) {
    tracing::info!(authenticated, "session changed");
    app.model.authenticated = authenticated;
    app.revalidate_route();
}
