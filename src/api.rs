use std::collections::HashMap;
use std::fmt;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::session::{Session, SessionError};

/// Server-assigned identifier. The backend currently uses integers but the
/// client treats ids as opaque and echoes them back in the form received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Poll {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Empty for legacy polls created before options existed
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub created_by: Option<Id>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Poll {
    pub fn is_legacy(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PollOption {
    pub id: Id,
    #[serde(alias = "option_text")]
    pub text: String,
    #[serde(default)]
    pub order: Option<i64>,
    /// Left as `None` when the backend omits it; display code treats that as zero
    #[serde(default)]
    pub vote_count: Option<u64>,
}

/// Body of `POST /polls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPoll {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
}

/// Vote tallies echoed by the backend after a vote. Logged, never displayed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteReceipt {
    #[serde(default)]
    pub vote_counts: HashMap<String, u64>,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdatePollRequest<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct VoteRequest<'a> {
    poll_option_id: &'a Id,
}

#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Gateway operations, used to pick the fallback message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    ListPolls,
    GetPoll,
    CreatePoll,
    UpdatePoll,
    DeletePoll,
    Vote,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Register => "Registration failed",
            Operation::Login => "Login failed",
            Operation::ListPolls => "Failed to load polls",
            Operation::GetPoll => "Failed to load poll",
            Operation::CreatePoll => "Failed to create poll",
            Operation::UpdatePoll => "Failed to update poll",
            Operation::DeletePoll => "Failed to delete poll",
            Operation::Vote => "Failed to record vote",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `error` field when present.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("login response did not include a token")]
    MissingCredential,
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The account exists but signing in with it afterwards failed
    #[error("registered, but login afterwards failed: {0}")]
    LoginAfterRegister(#[source] Box<ApiError>),
}

impl ApiError {
    /// Text to show the user: the server's message, else the operation's fallback
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::LoginAfterRegister(_) => {
                "Account created, but signing in failed. Please log in.".to_string()
            }
            _ => operation.fallback_message().to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::LoginAfterRegister(e) => e.status(),
            _ => None,
        }
    }
}

/// Pull the `error` field out of a JSON error body
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

#[derive(Clone)]
pub struct PollClient {
    base_url: String,
    session: Session,
    client: Client,
}

impl PollClient {
    pub fn new(base_url: String, session: Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: Client::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn poll_url(&self, id: &Id, suffix: &str) -> String {
        let encoded = urlencoding::encode(&id.to_string()).into_owned();
        self.url(&format!("/polls/{}{}", encoded, suffix))
    }

    /// Attach the bearer credential when one exists. Without one the request
    /// still goes out and the backend decides.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.credential() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::debug!(%status, ?message, "request rejected");
        Err(ApiError::Status { status, message })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let bytes = Self::send(builder).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Create an account, then make sure a credential ends up in the session.
    ///
    /// If the registration response carries no token, log in with the same
    /// email and password to obtain one.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let request = self.client.post(self.url("/auth/register")).json(&RegisterRequest {
            username,
            email,
            password,
        });
        let bytes = Self::send(request).await?.bytes().await?;
        let issued = serde_json::from_slice::<TokenResponse>(&bytes)
            .unwrap_or_default()
            .token
            .filter(|t| !t.trim().is_empty());

        match issued {
            Some(token) => {
                self.session.on_login(&token)?;
                Ok(token)
            }
            None => {
                tracing::debug!("registration returned no token, logging in");
                self.login(email, password).await.map_err(|e| {
                    tracing::warn!(error = %e, "login after registration failed");
                    ApiError::LoginAfterRegister(Box::new(e))
                })
            }
        }
    }

    /// Log in and store the returned credential
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let request = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password });
        let response: TokenResponse = Self::send_json(request).await?;
        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::MissingCredential)?;

        self.session.on_login(&token)?;
        Ok(token)
    }

    pub async fn list_polls(&self) -> Result<Vec<Poll>, ApiError> {
        let request = self.authorized(self.client.get(self.url("/polls")));
        Self::send_json(request).await
    }

    pub async fn get_poll(&self, id: &Id) -> Result<Poll, ApiError> {
        let request = self.authorized(self.client.get(self.poll_url(id, "")));
        Self::send_json(request).await
    }

    pub async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError> {
        let request = self.authorized(self.client.post(self.url("/polls")).json(poll));
        Self::send_json(request).await
    }

    pub async fn update_poll(
        &self,
        id: &Id,
        title: &str,
        description: &str,
    ) -> Result<Poll, ApiError> {
        let request = self.authorized(
            self.client
                .put(self.poll_url(id, ""))
                .json(&UpdatePollRequest { title, description }),
        );
        Self::send_json(request).await
    }

    /// Delete a poll. Any 2xx counts as confirmation, whatever the body.
    pub async fn delete_poll(&self, id: &Id) -> Result<(), ApiError> {
        let request = self.authorized(self.client.delete(self.poll_url(id, "")));
        Self::send(request).await?;
        Ok(())
    }

    pub async fn cast_vote(&self, poll_id: &Id, option_id: &Id) -> Result<VoteReceipt, ApiError> {
        let request = self.authorized(
            self.client
                .post(self.poll_url(poll_id, "/vote"))
                .json(&VoteRequest {
                    poll_option_id: option_id,
                }),
        );
        let bytes = Self::send(request).await?.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(VoteReceipt::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
