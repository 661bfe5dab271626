//! API Response Handler
//!
//! Applies responses from the background API service to the model.
//! A response whose screen has already been left is dropped; the service
//! aborts those tasks, but one may have finished just before the abort.

use crate::api::Operation;
use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::route::Route;
use crate::model::ListReason;
use crate::services::api::{ApiRequest, ApiResponse};
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - Authenticated: Login or registration finished
/// - PollsLoaded: Full poll list (initial, refresh, or after a mutation)
/// - PollLoaded: Fresh copy for the edit dialog
/// - PollCreated / PollUpdated / PollDeleted: Mutation results
/// - VoteRecorded: Vote result; success triggers one authoritative refetch
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::Authenticated { route, result } => {
            if app.model.route != route {
                tracing::debug!(?route, "dropping auth result for a screen no longer shown");
                return;
            }
            app.model.auth.submitting = false;

            match result {
                Ok(()) => {
                    app.model.auth.password.clear();
                    app.model.auth.error = None;
                    // The session already holds the credential; follow the
                    // change now instead of waiting for the next tick
                    app.sync_session();
                    app.navigate(Route::PollList);
                }
                Err(e) => {
                    let operation = if route == Route::Register {
                        Operation::Register
                    } else {
                        Operation::Login
                    };
                    tracing::warn!(error = %format_error_message(&e), "authentication failed");
                    app.model.auth.error = Some(e.user_message(operation));
                }
            }
        }

        ApiResponse::PollsLoaded { reason, result } => {
            if app.model.route != Route::PollList {
                return;
            }

            match result {
                Ok(polls) => {
                    tracing::debug!(?reason, count = polls.len(), "poll list loaded");
                    app.model.poll_list.replace_polls(polls);
                }
                Err(e) => {
                    tracing::warn!(?reason, error = %format_error_message(&e), "failed to load polls");
                    let list = &mut app.model.poll_list;
                    list.loading = false;
                    // Previous contents stay on screen; only the status bar says so
                    list.last_error = Some(classify_error(&e));
                }
            }
        }

        ApiResponse::PollLoaded { id, result } => {
            let Some(edit) = app.model.poll_list.edit.as_mut() else {
                return;
            };
            if edit.poll_id != id {
                return;
            }
            edit.loading = false;

            match result {
                Ok(poll) => {
                    edit.title = poll.title;
                    edit.description = poll.description;
                }
                Err(e) => {
                    // Keep the list's copy so the dialog is still usable
                    tracing::warn!(%id, error = %format_error_message(&e), "failed to load poll");
                    edit.error = Some(e.user_message(Operation::GetPoll));
                }
            }
        }

        ApiResponse::PollCreated { result } => {
            if app.model.route != Route::CreatePoll {
                return;
            }
            app.model.create_poll.submitting = false;

            match result {
                Ok(poll) => {
                    tracing::info!(id = %poll.id, "poll created");
                    app.model.show_toast(format!("Created \"{}\"", poll.title));
                    app.navigate(Route::PollList);
                }
                Err(e) => {
                    tracing::warn!(error = %format_error_message(&e), "failed to create poll");
                    app.model.create_poll.error = Some(e.user_message(Operation::CreatePoll));
                }
            }
        }

        ApiResponse::PollUpdated { id, result } => {
            if app.model.route != Route::PollList {
                return;
            }

            match result {
                Ok(poll) => {
                    tracing::info!(%id, "poll updated");
                    if app.model.poll_list.edit.as_ref().is_some_and(|e| e.poll_id == id) {
                        app.model.poll_list.edit = None;
                    }
                    app.model.show_toast(format!("Updated \"{}\"", poll.title));
                    app.load_polls(ListReason::AfterEdit);
                }
                Err(e) => {
                    tracing::warn!(%id, error = %format_error_message(&e), "failed to update poll");
                    let message = e.user_message(Operation::UpdatePoll);
                    match app.model.poll_list.edit.as_mut() {
                        Some(edit) if edit.poll_id == id => {
                            edit.saving = false;
                            edit.error = Some(message);
                        }
                        _ => app.model.ui.show_error_toast(&message),
                    }
                }
            }
        }

        ApiResponse::PollDeleted { id, result } => {
            if app.model.route != Route::PollList {
                return;
            }

            match result {
                Ok(()) => {
                    tracing::info!(%id, "poll deleted");
                    app.model.show_toast("Poll deleted".to_string());
                    app.load_polls(ListReason::AfterDelete);
                }
                Err(e) => {
                    tracing::warn!(%id, error = %format_error_message(&e), "failed to delete poll");
                    app.model
                        .ui
                        .show_error_toast(&e.user_message(Operation::DeletePoll));
                }
            }
        }

        ApiResponse::VoteRecorded {
            poll_id,
            option_id,
            result,
        } => {
            if app.model.route != Route::PollList {
                return;
            }
            let list = &mut app.model.poll_list;
            list.votes_in_flight = list.votes_in_flight.saturating_sub(1);

            match result {
                Ok(receipt) => {
                    // The receipt's counts are not trusted for display; the
                    // list is fetched again and shown as returned
                    tracing::debug!(%poll_id, %option_id, counts = ?receipt.vote_counts, "vote recorded");
                    app.send(ApiRequest::ListPolls {
                        reason: ListReason::AfterVote,
                    });
                }
                Err(e) => {
                    tracing::warn!(%poll_id, %option_id, error = %format_error_message(&e), "vote failed");
                    app.model.ui.show_error_toast(&e.user_message(Operation::Vote));
                }
            }
        }
    }
}
