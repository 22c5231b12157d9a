//! # sampah-client
//!
//! HTTP client for the Desa Peliatan waste-management backend.
//!
//! [`ApiClient`] implements the two backend seams used by the rest of the
//! workspace:
//! - [`BioporiApi`]: list, fetch, create, update, and the two one-way
//!   lifecycle transitions of biopori records
//! - [`AccountApi`]: login and registration
//!
//! Every failure is mapped onto [`ClientError`], whose variants follow the
//! client's error taxonomy (validation, unauthenticated, network, server,
//! unexpected).

mod account;
mod api;
mod biopori;
mod error;
mod http;

pub use api::{AccountApi, BioporiApi};
pub use error::ClientError;

use sampah_config::ApiConfig;

/// reqwest-backed client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unexpected` if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Send a request and run the shared status checks.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        auth: http::Auth,
    ) -> Result<reqwest::Response, ClientError> {
        let request = request.build().map_err(ClientError::from)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "backend request");
        let resp = self.http.execute(request).await?;
        tracing::debug!(status = resp.status().as_u16(), "backend response");
        http::check_response(resp, auth).await
    }
}
