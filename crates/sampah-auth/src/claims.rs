//! Best-effort token inspection for status displays.
//!
//! The backend issues JWTs but the client never verifies them; the expiry is
//! read from the payload only to tell the user when to log in again.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use sampah_core::Credential;
use serde::Serialize;

use crate::error::AuthError;
use crate::token_store::TokenSource;

fn decode_payload(jwt: &str) -> Result<serde_json::Value, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))
}

/// Decode the JWT `exp` claim without verifying the signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is not a JWT or has no
/// usable `exp` claim.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let exp = decode_payload(jwt)?["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}

/// Display name carried in the token (`username`, else `name`), if any.
#[must_use]
pub fn decode_username(jwt: &str) -> Option<String> {
    let payload = decode_payload(jwt).ok()?;
    ["username", "name"]
        .iter()
        .find_map(|key| payload[*key].as_str())
        .map(str::to_string)
}

/// Output of `sampah auth status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<String>,
    pub source: Option<TokenSource>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
}

impl AuthStatus {
    #[must_use]
    pub fn describe(credential: Option<&Credential>, source: Option<TokenSource>) -> Self {
        let Some(credential) = credential else {
            return Self {
                authenticated: false,
                user: None,
                source: None,
                expires_at: None,
                expired: false,
            };
        };
        let expires_at = match decode_expiry(credential.expose()) {
            Ok(at) => Some(at),
            Err(error) => {
                tracing::debug!(%error, "token expiry unknown");
                None
            }
        };
        Self {
            authenticated: true,
            user: decode_username(credential.expose()),
            source,
            expires_at,
            expired: expires_at.is_some_and(|at| at <= Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256"}"#),
            engine.encode(payload),
            engine.encode("sig")
        )
    }

    #[test]
    fn decode_expiry_reads_exp() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(r#"{{"id":"u1","exp":{exp}}}"#));
        assert_eq!(decode_expiry(&jwt).unwrap().timestamp(), exp);
    }

    #[test]
    fn decode_expiry_rejects_opaque_tokens() {
        let err = decode_expiry("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));

        let err = decode_expiry(&make_jwt(r#"{"id":"u1"}"#)).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn username_claim_is_optional() {
        assert_eq!(
            decode_username(&make_jwt(r#"{"username":"budi","exp":1}"#)).as_deref(),
            Some("budi")
        );
        assert_eq!(decode_username(&make_jwt(r#"{"id":"u1"}"#)), None);
        assert_eq!(decode_username("opaque"), None);
    }

    #[test]
    fn status_flags_expired_token() {
        let jwt = make_jwt(&format!(r#"{{"exp":{}}}"#, Utc::now().timestamp() - 60));
        let credential = Credential::new(jwt).unwrap();
        let status = AuthStatus::describe(Some(&credential), Some(TokenSource::File));
        assert!(status.authenticated);
        assert!(status.expired);
        assert_eq!(status.source, Some(TokenSource::File));
    }

    #[test]
    fn status_of_opaque_token_has_no_expiry() {
        let credential = Credential::new("opaque").unwrap();
        let status = AuthStatus::describe(Some(&credential), Some(TokenSource::Env));
        assert!(status.authenticated);
        assert_eq!(status.expires_at, None);
        assert!(!status.expired);
    }

    #[test]
    fn signed_out_status() {
        let status = AuthStatus::describe(None, None);
        assert!(!status.authenticated);
        assert!(!status.expired);
    }
}
