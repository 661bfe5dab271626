//! Pure Application Model
//!
//! The Model is organized into focused sub-models, one per screen plus shared UI state:
//!
//! - **AuthForm**: Login and Register fields
//! - **CreatePollForm**: Title, description and option fields
//! - **PollListModel**: Polls as last returned by the backend, selection, dialogs
//! - **UiModel**: Preferences, toast, quit flag
//!
//! No I/O happens here. The App drives requests and feeds responses back in.

pub mod auth;
pub mod create_poll;
pub mod poll_list;
pub mod types;
pub mod ui;

pub use auth::AuthForm;
pub use create_poll::CreatePollForm;
pub use poll_list::PollListModel;
pub use types::*;
pub use ui::UiModel;

use crate::logic::route::Route;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Screen currently shown (always the result of route resolution)
    pub route: Route,

    /// Mirror of the session's authenticated flag
    pub authenticated: bool,

    pub auth: AuthForm,
    pub create_poll: CreatePollForm,
    pub poll_list: PollListModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool, authenticated: bool) -> Self {
        Self {
            route: Route::Login,
            authenticated,
            auth: AuthForm::new(),
            create_poll: CreatePollForm::new(),
            poll_list: PollListModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.route == Route::PollList && self.poll_list.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
