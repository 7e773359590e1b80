use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("GitHub API request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Not found: {0}")]
    UpstreamNotFound(String),

    #[error("Malformed GitHub API response: {0}")]
    UpstreamMalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Upstream bodies may echo request headers back
            Error::UpstreamUnavailable(_) => "GitHub API unavailable".to_string(),
            Error::UpstreamMalformedResponse(_) => "Malformed GitHub API response".to_string(),
            Error::Http(_) => "External HTTP request failed".to_string(),

            Error::Internal(msg) | Error::Config(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("token") || lower.contains("secret") || lower.contains("key") {
                    "Error details redacted".to_string()
                } else {
                    self.to_string()
                }
            }

            Error::UpstreamTimeout(msg) => format!("GitHub API request timed out: {msg}"),
            Error::UpstreamNotFound(msg) => format!("Not found: {msg}"),
            Error::Io(_) => "I/O operation failed".to_string(),
            Error::Validation(msg) => format!("Validation error: {msg}"),
        }
    }

    /// HTTP status reported to API callers
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UpstreamNotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Error::UpstreamUnavailable(_)
            | Error::UpstreamMalformedResponse(_)
            | Error::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request error: {}", self.log_safe());

        let status = self.status_code();
        let error_message = match &self {
            Error::UpstreamNotFound(msg) | Error::Validation(msg) => msg.clone(),
            Error::UpstreamTimeout(_) => "GitHub API request timed out".to_string(),
            Error::UpstreamUnavailable(_) | Error::Http(_) => "External service error".to_string(),
            Error::UpstreamMalformedResponse(_) => "Unexpected response from GitHub".to_string(),
            _ => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
