//! Poll List Model
//!
//! Holds the polls exactly as the backend last returned them, plus the
//! selection and the list view's dialogs.

use crate::api::{Id, Poll};
use crate::logic::errors::ErrorType;
use crate::logic::navigation;

/// Edit dialog for a poll's title and description
#[derive(Clone, Debug)]
pub struct EditPollState {
    pub poll_id: Id,
    pub title: String,
    pub description: String,
    /// 0 = title, 1 = description
    pub focus: usize,
    /// Waiting for the fresh copy from `GET /polls/{id}`
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl EditPollState {
    pub fn from_poll(poll: &Poll) -> Self {
        Self {
            poll_id: poll.id.clone(),
            title: poll.title.clone(),
            description: poll.description.clone(),
            focus: 0,
            loading: true,
            saving: false,
            error: None,
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        if self.focus == 0 {
            &mut self.title
        } else {
            &mut self.description
        }
    }
}

/// Pending delete confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDelete {
    pub poll_id: Id,
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct PollListModel {
    pub polls: Vec<Poll>,

    /// True until the first list response after entering the screen
    pub loading: bool,

    pub selected_poll: Option<usize>,
    pub selected_option: Option<usize>,

    /// Votes sent but not yet answered
    pub votes_in_flight: usize,

    /// Classification of the last failed background load
    pub last_error: Option<ErrorType>,

    pub edit: Option<EditPollState>,
    pub confirm_delete: Option<ConfirmDelete>,
}

impl Default for PollListModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PollListModel {
    pub fn new() -> Self {
        Self {
            polls: Vec::new(),
            loading: true,
            selected_poll: None,
            selected_option: None,
            votes_in_flight: 0,
            last_error: None,
            edit: None,
            confirm_delete: None,
        }
    }

    pub fn selected_poll(&self) -> Option<&Poll> {
        self.selected_poll.and_then(|idx| self.polls.get(idx))
    }

    /// The (poll, option) pair a vote would be cast for
    pub fn vote_target(&self) -> Option<(Id, Id)> {
        let poll = self.selected_poll()?;
        let option = poll.options.get(self.selected_option?)?;
        Some((poll.id.clone(), option.id.clone()))
    }

    /// Vote target for the n-th option (0-based) of the selected poll
    pub fn vote_target_at(&self, option_index: usize) -> Option<(Id, Id)> {
        let poll = self.selected_poll()?;
        let option = poll.options.get(option_index)?;
        Some((poll.id.clone(), option.id.clone()))
    }

    /// Replace the list with a fresh backend response, keeping the selection
    /// on the same poll where possible
    pub fn replace_polls(&mut self, polls: Vec<Poll>) {
        let previous_id = self.selected_poll().map(|p| p.id.clone());
        self.selected_poll = navigation::reselect_poll(&polls, previous_id.as_ref(), self.selected_poll);
        self.polls = polls;
        self.loading = false;
        self.last_error = None;
        self.clamp_option();
    }

    pub fn select_next_poll(&mut self) {
        self.selected_poll = navigation::next_selection(self.selected_poll, self.polls.len());
        self.selected_option = None;
        self.clamp_option();
    }

    pub fn select_prev_poll(&mut self) {
        self.selected_poll = navigation::prev_selection(self.selected_poll, self.polls.len());
        self.selected_option = None;
        self.clamp_option();
    }

    pub fn select_next_option(&mut self) {
        let count = self.selected_poll().map_or(0, |p| p.options.len());
        self.selected_option = navigation::next_selection(self.selected_option, count);
    }

    pub fn select_prev_option(&mut self) {
        let count = self.selected_poll().map_or(0, |p| p.options.len());
        self.selected_option = navigation::prev_selection(self.selected_option, count);
    }

    fn clamp_option(&mut self) {
        let count = self.selected_poll().map_or(0, |p| p.options.len());
        self.selected_option = navigation::clamp_selection(self.selected_option, count);
    }

    pub fn has_modal(&self) -> bool {
        self.edit.is_some() || self.confirm_delete.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PollOption;

    fn poll(id: i64, option_ids: &[i64]) -> Poll {
        Poll {
            id: Id::Int(id),
            title: format!("poll {}", id),
            description: String::new(),
            options: option_ids
                .iter()
                .map(|o| PollOption {
                    id: Id::Int(*o),
                    text: format!("option {}", o),
                    order: None,
                    vote_count: None,
                })
                .collect(),
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn test_starts_loading() {
        let model = PollListModel::new();
        assert!(model.loading);
        assert!(model.vote_target().is_none());
    }

    #[test]
    fn test_replace_selects_first_poll_and_option() {
        let mut model = PollListModel::new();
        model.replace_polls(vec![poll(1, &[10, 11]), poll(2, &[])]);
        assert!(!model.loading);
        assert_eq!(model.selected_poll, Some(0));
        assert_eq!(model.vote_target(), Some((Id::Int(1), Id::Int(10))));
    }

    #[test]
    fn test_replace_keeps_selected_poll_by_id() {
        let mut model = PollListModel::new();
        model.replace_polls(vec![poll(1, &[10]), poll(2, &[20, 21])]);
        model.select_next_poll();
        model.select_next_option();
        assert_eq!(model.vote_target(), Some((Id::Int(2), Id::Int(21))));

        // Backend returns the polls in a different order
        model.replace_polls(vec![poll(3, &[]), poll(2, &[20, 21]), poll(1, &[10])]);
        assert_eq!(model.selected_poll, Some(1));
        assert_eq!(model.vote_target(), Some((Id::Int(2), Id::Int(21))));
    }

    #[test]
    fn test_legacy_poll_has_no_vote_target() {
        let mut model = PollListModel::new();
        model.replace_polls(vec![poll(1, &[])]);
        assert_eq!(model.selected_option, None);
        assert_eq!(model.vote_target(), None);
        assert_eq!(model.vote_target_at(0), None);
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut model = PollListModel::new();
        model.replace_polls(vec![poll(1, &[10, 11, 12])]);
        model.select_prev_option();
        assert_eq!(model.selected_option, Some(2));
        model.select_next_option();
        assert_eq!(model.selected_option, Some(0));
    }
}
