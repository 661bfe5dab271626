//! Form submission for the auth and create-poll screens

use crate::logic::route::Route;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Validate the create-poll form and send it. A validation failure is
    /// shown inline and nothing is sent. Repeated submits each send a request.
    pub fn submit_create_poll(&mut self) {
        let form = &mut self.model.create_poll;
        match form.submission() {
            Ok(poll) => {
                form.error = None;
                form.submitting = true;
                tracing::debug!(options = poll.options.len(), "submitting new poll");
                self.send(ApiRequest::CreatePoll { poll });
            }
            Err(e) => {
                form.error = Some(e.to_string());
            }
        }
    }

    /// Submit the login or register form, depending on the current screen
    pub fn submit_auth(&mut self) {
        let route = self.model.route;
        let form = &mut self.model.auth;
        if let Err(e) = form.validate(route) {
            form.error = Some(e.to_string());
            return;
        }
        form.error = None;
        form.submitting = true;

        let request = match route {
            Route::Register => ApiRequest::Register {
                username: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password.clone(),
            },
            Route::Login => ApiRequest::Login {
                email: form.email.trim().to_string(),
                password: form.password.clone(),
            },
            _ => {
                form.submitting = false;
                return;
            }
        };
        self.send(request);
    }
}
