//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401/403 → [`ClientError::Unauthenticated`],
//! non-success → [`ClientError::Server`]) and the backend's `{ data: ... }`
//! envelope so the endpoint modules stay focused on request construction.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Whether a request carried the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    Anonymous,
}

/// Check an HTTP response for error conditions.
///
/// On authenticated requests 401 and 403 mean the credential was rejected.
/// On anonymous requests (login, register) they are ordinary failures and
/// keep the server's message.
pub async fn check_response(
    resp: reqwest::Response,
    auth: Auth,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if auth == Auth::Bearer
        && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN)
    {
        return Err(ClientError::Unauthenticated);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Server {
            status: status.as_u16(),
            message: error_message(&body, status),
        });
    }
    Ok(resp)
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// The backend wraps most payloads in `{ "data": ... }` but not all of them.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Decode a body that may or may not be wrapped in `{ data }`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ClientError::Unexpected(format!("cannot decode response: {e}")))
}

/// Like [`decode`], but an undecodable or empty body yields `None`.
pub fn decode_optional<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match decode(body) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "response body not usable; ignoring");
            None
        }
    }
}
