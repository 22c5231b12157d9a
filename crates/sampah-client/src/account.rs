//! Login and registration endpoints.

use sampah_core::Credential;
use sampah_core::entities::{Login, Registration};

use crate::api::AccountApi;
use crate::error::ClientError;
use crate::http::Auth;
use crate::ApiClient;

/// The token always sits at the top level, next to whatever else the
/// backend returns (`data` carries the user object on login).
#[derive(serde::Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

impl TokenResponse {
    fn parse(body: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(body)
            .map_err(|e| ClientError::Unexpected(format!("cannot decode token response: {e}")))
    }
}

impl AccountApi for ApiClient {
    async fn login(&self, login: &Login) -> Result<Credential, ClientError> {
        let request = self.http.post(self.url("login")).json(login);
        let body = self.send(request, Auth::Anonymous).await?.bytes().await?;
        let response = TokenResponse::parse(&body)?;
        response
            .token
            .and_then(Credential::new)
            .ok_or_else(|| ClientError::Unexpected("login response carried no token".into()))
    }

    async fn register(&self, registration: &Registration) -> Result<Option<Credential>, ClientError> {
        let request = self.http.post(self.url("register")).json(registration);
        let body = self.send(request, Auth::Anonymous).await?.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let response = TokenResponse::parse(&body)?;
        Ok(response.token.and_then(Credential::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_tolerates_missing_token() {
        let parsed = TokenResponse::parse(br#"{"message":"registered"}"#).unwrap();
        assert!(parsed.token.is_none());
        let parsed = TokenResponse::parse(br#"{"token":"abc"}"#).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("abc"));
    }

    #[test]
    fn token_is_read_beside_a_data_object() {
        let parsed =
            TokenResponse::parse(br#"{"token":"abc","data":{"id":1,"username":"budi"}}"#).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("abc"));
    }
}
