//! Background request service
//!
//! Every gateway call runs on its own task so the render loop never waits on
//! the network. Tasks are grouped by the screen that issued them; leaving a
//! screen sends [`ApiRequest::CancelScope`], which aborts that screen's
//! in-flight tasks so no result lands after teardown.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::{ApiError, Id, NewPoll, Operation, Poll, PollClient, VoteReceipt};
use crate::logic::route::Route;
use crate::model::ListReason;

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    Register {
        username: String,
        email: String,
        password: String,
    },

    Login {
        email: String,
        password: String,
    },

    /// Fetch the full poll list
    ListPolls { reason: ListReason },

    /// Fetch one poll (fresh values for the edit dialog)
    GetPoll { id: Id },

    CreatePoll { poll: NewPoll },

    UpdatePoll {
        id: Id,
        title: String,
        description: String,
    },

    DeletePoll { id: Id },

    CastVote { poll_id: Id, option_id: Id },

    /// Abort every in-flight request issued from this screen
    CancelScope(Route),
}

impl ApiRequest {
    /// Screen that owns the request
    pub fn scope(&self) -> Route {
        match self {
            ApiRequest::Register { .. } => Route::Register,
            ApiRequest::Login { .. } => Route::Login,
            ApiRequest::CreatePoll { .. } => Route::CreatePoll,
            ApiRequest::CancelScope(route) => *route,
            _ => Route::PollList,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        Some(match self {
            ApiRequest::Register { .. } => Operation::Register,
            ApiRequest::Login { .. } => Operation::Login,
            ApiRequest::ListPolls { .. } => Operation::ListPolls,
            ApiRequest::GetPoll { .. } => Operation::GetPoll,
            ApiRequest::CreatePoll { .. } => Operation::CreatePoll,
            ApiRequest::UpdatePoll { .. } => Operation::UpdatePoll,
            ApiRequest::DeletePoll { .. } => Operation::DeletePoll,
            ApiRequest::CastVote { .. } => Operation::Vote,
            ApiRequest::CancelScope(_) => return None,
        })
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    /// Login or registration finished. On success the credential is already
    /// stored in the session.
    Authenticated {
        route: Route,
        result: Result<(), ApiError>,
    },

    PollsLoaded {
        reason: ListReason,
        result: Result<Vec<Poll>, ApiError>,
    },

    PollLoaded {
        id: Id,
        result: Result<Poll, ApiError>,
    },

    PollCreated {
        result: Result<Poll, ApiError>,
    },

    PollUpdated {
        id: Id,
        result: Result<Poll, ApiError>,
    },

    PollDeleted {
        id: Id,
        result: Result<(), ApiError>,
    },

    VoteRecorded {
        poll_id: Id,
        option_id: Id,
        result: Result<VoteReceipt, ApiError>,
    },
}

/// API service worker that runs requests in the background
pub struct ApiService {
    client: PollClient,
    in_flight: HashMap<Route, JoinSet<()>>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: PollClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            in_flight: HashMap::new(),
            response_tx,
        }
    }

    fn dispatch(&mut self, request: ApiRequest) {
        let scope = request.scope();

        if let ApiRequest::CancelScope(route) = request {
            if let Some(mut tasks) = self.in_flight.remove(&route) {
                if !tasks.is_empty() {
                    tracing::debug!(?route, count = tasks.len(), "aborting in-flight requests");
                }
                tasks.abort_all();
                // Reap without waiting, the set is dropped either way
                while tasks.try_join_next().is_some() {}
            }
            return;
        }

        let tasks = self.in_flight.entry(scope).or_default();
        // Drop bookkeeping for tasks that already finished
        while tasks.try_join_next().is_some() {}

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        tracing::debug!(?scope, operation = ?request.operation(), "dispatching request");

        tasks.spawn(async move {
            if let Some(response) = Self::execute_request(&client, request).await {
                let _ = response_tx.send(response);
            }
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &PollClient, request: ApiRequest) -> Option<ApiResponse> {
        let response = match request {
            ApiRequest::Register {
                username,
                email,
                password,
            } => {
                let result = client
                    .register(&username, &email, &password)
                    .await
                    .map(|_| ());
                ApiResponse::Authenticated {
                    route: Route::Register,
                    result,
                }
            }

            ApiRequest::Login { email, password } => {
                let result = client.login(&email, &password).await.map(|_| ());
                ApiResponse::Authenticated {
                    route: Route::Login,
                    result,
                }
            }

            ApiRequest::ListPolls { reason } => {
                let result = client.list_polls().await;
                ApiResponse::PollsLoaded { reason, result }
            }

            ApiRequest::GetPoll { id } => {
                let result = client.get_poll(&id).await;
                ApiResponse::PollLoaded { id, result }
            }

            ApiRequest::CreatePoll { poll } => {
                let result = client.create_poll(&poll).await;
                ApiResponse::PollCreated { result }
            }

            ApiRequest::UpdatePoll {
                id,
                title,
                description,
            } => {
                let result = client.update_poll(&id, &title, &description).await;
                ApiResponse::PollUpdated { id, result }
            }

            ApiRequest::DeletePoll { id } => {
                let result = client.delete_poll(&id).await;
                ApiResponse::PollDeleted { id, result }
            }

            ApiRequest::CastVote { poll_id, option_id } => {
                let result = client.cast_vote(&poll_id, &option_id).await;
                ApiResponse::VoteRecorded {
                    poll_id,
                    option_id,
                    result,
                }
            }

            ApiRequest::CancelScope(_) => return None,
        };
        Some(response)
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: PollClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        tracing::debug!("request channel closed, API service stopping");
    });

    (request_tx, response_rx)
}
