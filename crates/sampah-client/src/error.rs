//! Client error taxonomy.

use thiserror::Error;

/// Errors surfaced by backend calls.
///
/// `Validation` and `Unauthenticated` can be raised before any request is
/// sent; the rest describe what happened on the wire.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Input rejected locally; no request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No credential, or the backend rejected it (401/403).
    #[error("not authenticated; run `sampah auth login`")]
    Unauthenticated,

    /// The request never reached the backend or the connection failed.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend returned a non-success status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// `error`/`message` field of the body, or the raw body.
        message: String,
    },

    /// The response could not be understood.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// Whether the caller should prompt for a fresh login.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() || error.is_body() {
            Self::Unexpected(error.to_string())
        } else {
            Self::Network(error)
        }
    }
}
