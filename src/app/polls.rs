//! Poll list orchestration
//!
//! Voting never touches a displayed count. The vote goes out, and when it
//! comes back successful the handler asks for the whole list again.

use crate::api::Id;
use crate::logic::route::Route;
use crate::model::poll_list::{ConfirmDelete, EditPollState};
use crate::model::{ListReason, ValidationError};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub fn load_polls(&mut self, reason: ListReason) {
        self.send(ApiRequest::ListPolls { reason });
    }

    /// Vote for `option_id` in `poll_id`. No local bookkeeping beyond an
    /// in-flight counter for the status bar.
    pub fn cast_vote(&mut self, poll_id: Id, option_id: Id) {
        tracing::debug!(%poll_id, %option_id, "casting vote");
        self.model.poll_list.votes_in_flight += 1;
        self.send(ApiRequest::CastVote { poll_id, option_id });
    }

    /// Vote for the highlighted option of the highlighted poll
    pub fn vote_selected(&mut self) {
        if let Some((poll_id, option_id)) = self.model.poll_list.vote_target() {
            self.cast_vote(poll_id, option_id);
        }
    }

    /// Vote for the n-th (0-based) option of the highlighted poll
    pub fn vote_option_at(&mut self, index: usize) {
        if let Some((poll_id, option_id)) = self.model.poll_list.vote_target_at(index) {
            self.model.poll_list.selected_option = Some(index);
            self.cast_vote(poll_id, option_id);
        }
    }

    pub fn request_delete_selected(&mut self) {
        let confirm = self
            .model
            .poll_list
            .selected_poll()
            .map(|poll| ConfirmDelete {
                poll_id: poll.id.clone(),
                title: poll.title.clone(),
            });
        if confirm.is_some() {
            self.model.poll_list.confirm_delete = confirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(confirm) = self.model.poll_list.confirm_delete.take() {
            self.send(ApiRequest::DeletePoll {
                id: confirm.poll_id,
            });
        }
    }

    pub fn cancel_delete(&mut self) {
        self.model.poll_list.confirm_delete = None;
    }

    /// Open the edit dialog with the list's copy, then fetch a fresh one
    pub fn open_edit_selected(&mut self) {
        let Some(poll) = self.model.poll_list.selected_poll() else {
            return;
        };
        let edit = EditPollState::from_poll(poll);
        let id = edit.poll_id.clone();
        self.model.poll_list.edit = Some(edit);
        self.send(ApiRequest::GetPoll { id });
    }

    pub fn save_edit(&mut self) {
        let Some(edit) = self.model.poll_list.edit.as_mut() else {
            return;
        };
        if edit.title.trim().is_empty() {
            edit.error = Some(ValidationError::MissingTitle.to_string());
            return;
        }
        edit.saving = true;
        edit.error = None;
        let request = ApiRequest::UpdatePoll {
            id: edit.poll_id.clone(),
            title: edit.title.clone(),
            description: edit.description.clone(),
        };
        self.send(request);
    }

    pub fn cancel_edit(&mut self) {
        self.model.poll_list.edit = None;
    }

    /// Clear the session and return to the login screen
    pub fn logout(&mut self) {
        if let Err(e) = self.session.on_logout() {
            tracing::error!(error = %e, "logout failed");
            self.model.ui.show_error_toast(&e.to_string());
            return;
        }
        // The watch channel already carries the change; consume it here so
        // the next sync does not navigate a second time
        self.session_rx.mark_unchanged();
        self.navigate(Route::Login);
    }
}
