use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    Forbidden,    // HTTP 403
    NotFound,     // HTTP 404
    Rejected,     // Other HTTP 4xx
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "backend unreachable",
            ErrorType::Timeout => "timed out",
            ErrorType::Unauthorized => "not authorized",
            ErrorType::Forbidden => "forbidden",
            ErrorType::NotFound => "not found",
            ErrorType::Rejected => "rejected",
            ErrorType::ServerError => "server error",
            ErrorType::NetworkError => "network error",
            ErrorType::Other => "error",
        }
    }
}

/// Classify a gateway error
pub fn classify_error(error: &ApiError) -> ErrorType {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            401 => ErrorType::Unauthorized,
            403 => ErrorType::Forbidden,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            400..=499 => ErrorType::Rejected,
            _ => ErrorType::Other,
        };
    }

    if let ApiError::Transport(e) = error {
        if e.is_timeout() {
            return ErrorType::Timeout;
        }
        if e.is_connect() {
            return ErrorType::ConnectionRefused;
        }
    }

    classify_message(&error.to_string())
}

/// Fallback classification from error text
pub fn classify_message(message: &str) -> ErrorType {
    let error_msg = message.to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Root cause of an error chain, for logs and diagnostics
pub fn format_error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
