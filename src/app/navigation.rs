//! Route changes
//!
//! Every navigation is resolved against the session first. Leaving a screen
//! cancels its in-flight requests; entering one resets it to a fresh state.

use crate::logic::route::{resolve, Route};
use crate::model::{AuthForm, CreatePollForm, ListReason, PollListModel};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Navigate to `target`, or wherever the guard sends us instead
    pub fn navigate(&mut self, target: Route) {
        let authenticated = self.session.is_authenticated();
        self.model.authenticated = authenticated;

        let route = resolve(target, authenticated);
        if route != target {
            tracing::debug!(?target, ?route, "navigation redirected");
        }
        if route == self.model.route {
            return;
        }

        self.leave(self.model.route);
        self.model.route = route;
        self.enter(route);
    }

    /// Show the first screen: the poll list when a credential is stored, else login
    pub fn start(&mut self) {
        let authenticated = self.session.is_authenticated();
        self.model.authenticated = authenticated;
        let route = resolve(Route::PollList, authenticated);
        self.model.route = route;
        self.enter(route);
    }

    /// Re-run the guard for the current screen (after a session change)
    pub fn revalidate_route(&mut self) {
        let current = self.model.route;
        let authenticated = self.session.is_authenticated();
        self.model.authenticated = authenticated;
        if resolve(current, authenticated) != current {
            self.navigate(current);
        }
    }

    fn leave(&mut self, route: Route) {
        self.send(ApiRequest::CancelScope(route));
    }

    fn enter(&mut self, route: Route) {
        match route {
            Route::Login | Route::Register => {
                // Keep what was typed when flipping between the two auth screens
                let keep = std::mem::take(&mut self.model.auth);
                self.model.auth = AuthForm {
                    username: keep.username,
                    email: keep.email,
                    ..AuthForm::new()
                };
            }
            Route::PollList => {
                self.model.poll_list = PollListModel::new();
                self.send(ApiRequest::ListPolls {
                    reason: ListReason::Initial,
                });
            }
            Route::CreatePoll => {
                self.model.create_poll = CreatePollForm::new();
            }
        }
    }
}
