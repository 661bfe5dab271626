//! App Orchestration
//!
//! `App` owns the pure [`Model`] plus the runtime pieces around it: the
//! session, the request channel to the background API service and the
//! response channel coming back. Methods are grouped by domain:
//!
//! - navigation: Route changes, guarded by the session
//! - polls: List loading, voting, edit/delete, logout
//! - forms: Create-poll and login/register submission
//!
//! Response and session handling lives in `crate::handlers`.

pub(crate) mod forms;
pub(crate) mod navigation;
pub(crate) mod polls;

use notify::RecommendedWatcher;
use tokio::sync::{mpsc, watch};

use crate::api::PollClient;
use crate::model::Model;
use crate::services::api::{spawn_api_service, ApiRequest, ApiResponse};
use crate::session::Session;

pub struct App {
    pub model: Model,

    session: Session,
    session_rx: watch::Receiver<bool>,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Kept alive for cross-instance credential events
    session_watcher: Option<RecommendedWatcher>,
}

impl App {
    /// Build the app around a gateway client. Must be called inside a tokio runtime.
    pub fn new(client: PollClient, vim_mode: bool) -> Self {
        let session = client.session().clone();
        let mut session_rx = session.subscribe();
        session_rx.mark_unchanged();

        let model = Model::new(vim_mode, session.is_authenticated());
        let (api_tx, api_rx) = spawn_api_service(client);

        Self {
            model,
            session,
            session_rx,
            api_tx,
            api_rx,
            session_watcher: None,
        }
    }

    /// Follow credential changes made by other instances
    pub fn watch_session(&mut self) -> anyhow::Result<()> {
        let watcher = crate::services::session_watch::spawn_session_watcher(self.session.clone())?;
        self.session_watcher = Some(watcher);
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn send(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            tracing::error!("API service is gone, request dropped");
        }
    }

    /// Wait for the next background response
    pub async fn next_response(&mut self) -> Option<ApiResponse> {
        self.api_rx.recv().await
    }

    /// Handle every response that has already arrived (non-blocking)
    pub fn drain_responses(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(response) = self.api_rx.try_recv() {
            self.handle_api_response(response);
            handled += 1;
        }
        handled
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    pub fn handle_api_response(&mut self, response: ApiResponse) {
        crate::handlers::handle_api_response(self, response);
    }

    /// Apply a pending session change, if any. Returns true when one was applied.
    pub fn sync_session(&mut self) -> bool {
        if !self.session_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let authenticated = *self.session_rx.borrow_and_update();
        crate::handlers::handle_session_change(self, authenticated);
        true
    }
}
