/*
[INPUT]:  Error sources (HTTP transport, backend rejections, serialization)
[OUTPUT]: RemoteError with status code, message and optional details
[POS]:    Error handling layer - unified error type for remote calls
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Status reported for failures that never produced an HTTP status
pub const FALLBACK_STATUS: u16 = 500;

/// Error raised by any remote task API call
#[derive(Error, Debug)]
pub enum RemoteError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record id that cannot name a record in the task collection
    #[error("Invalid record id: {0:?}")]
    InvalidRecordId(String),
}

impl RemoteError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        RemoteError::Api {
            status: status.as_u16(),
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status of the failure, 500 when none was received
    pub fn status(&self) -> u16 {
        match self {
            RemoteError::Api { status, .. } => *status,
            RemoteError::Http(err) => err
                .status()
                .map(|status| status.as_u16())
                .unwrap_or(FALLBACK_STATUS),
            RemoteError::InvalidRecordId(_) => StatusCode::NOT_FOUND.as_u16(),
            _ => FALLBACK_STATUS,
        }
    }

    /// Human readable message suitable for a notification banner
    pub fn message(&self) -> String {
        match self {
            RemoteError::Api { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Structured details attached by the backend, if any
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            RemoteError::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Check if error indicates an expired or rejected session
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), 401 | 403)
    }
}

/// Result type alias for remote operations
pub type Result<T> = std::result::Result<T, RemoteError>;
