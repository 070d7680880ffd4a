//! Client error model.

use thiserror::Error;

/// Result type for every client operation.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API client.
///
/// Two failure kinds cross the service boundary: local validation
/// (short-circuited before any network call) and remote failure (non-success
/// response, surfaced as an opaque server message). `Network` and `Storage`
/// cover the transport and session-store realities of a native client.
/// Nothing is ever panicked across this boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local validation failure; no network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Non-success API response with the server-provided message.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, DNS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Session store could not be written.
    #[error("session store error: {0}")]
    Storage(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error came back from the server (vs. locally produced).
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
