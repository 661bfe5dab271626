//! Fake polling backend for integration tests
//!
//! Serves the REST surface under `/api` on an ephemeral port and records
//! every request (method, path, bearer header, JSON body).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use polltui::api::PollClient;
use polltui::services::ApiResponse;
use polltui::session::Session;
use polltui::App;

pub const TOKEN: &str = "tok-123";
pub const PASSWORD: &str = "secret";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct BackendState {
    pub polls: Vec<Value>,
    pub requests: Vec<Recorded>,
    /// Registration answers with `{token}` instead of the user record
    pub register_issues_token: bool,
    next_id: i64,
}

#[derive(Clone)]
pub struct FakeBackend {
    pub base_url: String,
    pub state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        Self::with_polls(Vec::new()).await
    }

    pub async fn with_polls(polls: Vec<Value>) -> Self {
        let state = Arc::new(Mutex::new(BackendState {
            polls,
            next_id: 100,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/api/auth/register", post(register))
            .route("/api/auth/login", post(login))
            .route("/api/polls", get(list_polls).post(create_poll))
            .route(
                "/api/polls/{id}",
                get(get_poll).put(update_poll).delete(delete_poll),
            )
            .route("/api/polls/{id}/vote", post(vote))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self, method: Method, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

/// Poll JSON in the shape the backend lists it
pub fn poll_json(id: i64, title: &str, options: &[(i64, &str, i64)]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "created_by": 1,
        "created_at": "2024-05-01T12:00:00Z",
        "options": options
            .iter()
            .enumerate()
            .map(|(order, (oid, text, count))| json!({
                "id": oid,
                "text": text,
                "order": order,
                "vote_count": count,
            }))
            .collect::<Vec<_>>(),
    })
}

type Shared = State<Arc<Mutex<BackendState>>>;

fn record(state: &Mutex<BackendState>, method: Method, path: String, headers: &HeaderMap, body: Value) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.lock().unwrap().requests.push(Recorded {
        method,
        path,
        authorization,
        body,
    });
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {}", TOKEN).as_str())
}

async fn register(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, Method::POST, "/api/auth/register".into(), &headers, body.clone());
    if body["email"] == "taken@example.com" {
        return error(StatusCode::BAD_REQUEST, "Email already registered");
    }
    if state.lock().unwrap().register_issues_token {
        return Json(json!({ "token": TOKEN })).into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({ "id": 1, "username": body["username"], "email": body["email"] })),
    )
        .into_response()
}

async fn login(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, Method::POST, "/api/auth/login".into(), &headers, body.clone());
    if body["password"] != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(json!({ "token": TOKEN })).into_response()
}

async fn list_polls(State(state): Shared, headers: HeaderMap) -> Response {
    record(&state, Method::GET, "/api/polls".into(), &headers, Value::Null);
    let polls = state.lock().unwrap().polls.clone();
    Json(Value::Array(polls)).into_response()
}

async fn get_poll(State(state): Shared, Path(id): Path<String>, headers: HeaderMap) -> Response {
    record(&state, Method::GET, format!("/api/polls/{}", id), &headers, Value::Null);
    let guard = state.lock().unwrap();
    match guard.polls.iter().find(|p| p["id"].to_string() == id) {
        Some(poll) => Json(poll.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Poll not found"),
    }
}

async fn create_poll(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, Method::POST, "/api/polls".into(), &headers, body.clone());
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Authorization required");
    }
    if body["title"] == "Duplicate" {
        // No `error` field: the client falls back to its generic message
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    let mut guard = state.lock().unwrap();
    guard.next_id += 1;
    let id = guard.next_id;
    let options: Vec<(i64, String)> = body["options"]
        .as_array()
        .map(|opts| {
            opts.iter()
                .enumerate()
                .map(|(i, o)| (id * 10 + i as i64, o.as_str().unwrap_or_default().to_string()))
                .collect()
        })
        .unwrap_or_default();
    let option_refs: Vec<(i64, &str, i64)> =
        options.iter().map(|(oid, text)| (*oid, text.as_str(), 0)).collect();
    let mut poll = poll_json(id, body["title"].as_str().unwrap_or_default(), &option_refs);
    poll["description"] = body["description"].clone();
    guard.polls.push(poll.clone());
    (StatusCode::CREATED, Json(poll)).into_response()
}

async fn update_poll(
    State(state): Shared,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, Method::PUT, format!("/api/polls/{}", id), &headers, body.clone());
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Authorization required");
    }
    let mut guard = state.lock().unwrap();
    match guard.polls.iter_mut().find(|p| p["id"].to_string() == id) {
        Some(poll) => {
            poll["title"] = body["title"].clone();
            poll["description"] = body["description"].clone();
            Json(poll.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Poll not found"),
    }
}

async fn delete_poll(State(state): Shared, Path(id): Path<String>, headers: HeaderMap) -> Response {
    record(&state, Method::DELETE, format!("/api/polls/{}", id), &headers, Value::Null);
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Authorization required");
    }
    let mut guard = state.lock().unwrap();
    let before = guard.polls.len();
    guard.polls.retain(|p| p["id"].to_string() != id);
    if guard.polls.len() == before {
        return error(StatusCode::NOT_FOUND, "Poll not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn vote(
    State(state): Shared,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, Method::POST, format!("/api/polls/{}/vote", id), &headers, body.clone());
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Authorization required");
    }
    let option_id = body["poll_option_id"].clone();

    let mut guard = state.lock().unwrap();
    let Some(poll) = guard.polls.iter_mut().find(|p| p["id"].to_string() == id) else {
        return error(StatusCode::NOT_FOUND, "Poll not found");
    };
    let Some(options) = poll["options"].as_array_mut() else {
        return error(StatusCode::BAD_REQUEST, "Poll has no options");
    };
    let Some(option) = options.iter_mut().find(|o| o["id"] == option_id) else {
        return error(StatusCode::BAD_REQUEST, "Invalid option for this poll");
    };
    let count = option["vote_count"].as_i64().unwrap_or(0) + 1;
    option["vote_count"] = json!(count);

    let counts: HashMap<String, Value> = options
        .iter()
        .map(|o| (o["id"].to_string(), o["vote_count"].clone()))
        .collect();
    Json(json!({ "vote_counts": counts })).into_response()
}

/// Session stored in a fresh temp dir, optionally already logged in
pub fn session(dir: &tempfile::TempDir, logged_in: bool) -> Session {
    let session = Session::open(dir.path().join("polltui").join("token"));
    if logged_in {
        session.on_login(TOKEN).unwrap();
    }
    session
}

pub fn client(backend: &FakeBackend, session: Session) -> PollClient {
    PollClient::new(backend.base_url.clone(), session)
}

pub fn app(backend: &FakeBackend, session: Session) -> App {
    App::new(client(backend, session), false)
}

/// Wait for the next response and apply it
pub async fn pump(app: &mut App) {
    let response = tokio::time::timeout(Duration::from_secs(5), app.next_response())
        .await
        .expect("timed out waiting for a response")
        .expect("API service stopped");
    app.handle_api_response(response);
}

/// Wait for the next response without applying it
pub async fn next(app: &mut App) -> ApiResponse {
    tokio::time::timeout(Duration::from_secs(5), app.next_response())
        .await
        .expect("timed out waiting for a response")
        .expect("API service stopped")
}

/// True when no response arrives within a short grace period
pub async fn quiet(app: &mut App) -> bool {
    tokio::time::timeout(Duration::from_millis(300), app.next_response())
        .await
        .is_err()
}
