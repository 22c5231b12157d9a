//! Backend seams.
//!
//! The state layer is generic over these traits so it can run against the
//! real [`crate::ApiClient`] or an in-memory fake.

use std::future::Future;

use sampah_core::Credential;
use sampah_core::entities::{BioporiPayload, BioporiRecord, Login, Registration};

use crate::error::ClientError;

/// Biopori endpoints. All calls carry the bearer credential.
pub trait BioporiApi {
    /// `GET /api/biopori`
    fn list_biopori(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<BioporiRecord>, ClientError>> + Send;

    /// `GET /api/biopori/:id`
    fn get_biopori(
        &self,
        credential: &Credential,
        id: &str,
    ) -> impl Future<Output = Result<BioporiRecord, ClientError>> + Send;

    /// `POST /api/biopori`. Returns the created record when the response
    /// carries one.
    fn create_biopori(
        &self,
        credential: &Credential,
        payload: &BioporiPayload,
    ) -> impl Future<Output = Result<Option<BioporiRecord>, ClientError>> + Send;

    /// `PUT /api/biopori/:id`
    fn update_biopori(
        &self,
        credential: &Credential,
        id: &str,
        payload: &BioporiPayload,
    ) -> impl Future<Output = Result<Option<BioporiRecord>, ClientError>> + Send;

    /// `PUT /api/biopori/:id/full`
    fn mark_full(
        &self,
        credential: &Credential,
        id: &str,
    ) -> impl Future<Output = Result<Option<BioporiRecord>, ClientError>> + Send;

    /// `PUT /api/biopori/:id/harvested`
    fn mark_harvested(
        &self,
        credential: &Credential,
        id: &str,
    ) -> impl Future<Output = Result<Option<BioporiRecord>, ClientError>> + Send;
}

/// Anonymous account endpoints.
pub trait AccountApi {
    /// `POST /api/login`. Returns the issued bearer credential.
    fn login(&self, login: &Login) -> impl Future<Output = Result<Credential, ClientError>> + Send;

    /// `POST /api/register`. Some deployments sign the user in immediately
    /// and return a token.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<Option<Credential>, ClientError>> + Send;
}
