//! Biopori endpoints.

use sampah_core::Credential;
use sampah_core::entities::{BioporiPayload, BioporiRecord};

use crate::api::BioporiApi;
use crate::error::ClientError;
use crate::http::{Auth, decode, decode_optional};
use crate::ApiClient;

impl ApiClient {
    fn biopori_url(&self, id: Option<&str>, action: Option<&str>) -> String {
        let mut path = String::from("biopori");
        if let Some(id) = id {
            path.push('/');
            path.push_str(&urlencoding::encode(id));
        }
        if let Some(action) = action {
            path.push('/');
            path.push_str(action);
        }
        self.url(&path)
    }

    async fn transition(
        &self,
        credential: &Credential,
        id: &str,
        action: &str,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        let request = self
            .http
            .put(self.biopori_url(Some(id), Some(action)))
            .bearer_auth(credential.expose());
        let body = self.send(request, Auth::Bearer).await?.bytes().await?;
        Ok(decode_optional(&body))
    }
}

impl BioporiApi for ApiClient {
    async fn list_biopori(&self, credential: &Credential) -> Result<Vec<BioporiRecord>, ClientError> {
        let request = self
            .http
            .get(self.biopori_url(None, None))
            .bearer_auth(credential.expose());
        let body = self.send(request, Auth::Bearer).await?.bytes().await?;
        let records: Vec<BioporiRecord> = decode(&body)?;
        tracing::debug!(count = records.len(), "fetched biopori records");
        Ok(records)
    }

    async fn get_biopori(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<BioporiRecord, ClientError> {
        let request = self
            .http
            .get(self.biopori_url(Some(id), None))
            .bearer_auth(credential.expose());
        let body = self.send(request, Auth::Bearer).await?.bytes().await?;
        decode(&body)
    }

    async fn create_biopori(
        &self,
        credential: &Credential,
        payload: &BioporiPayload,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        let request = self
            .http
            .post(self.biopori_url(None, None))
            .bearer_auth(credential.expose())
            .json(payload);
        let body = self.send(request, Auth::Bearer).await?.bytes().await?;
        Ok(decode_optional(&body))
    }

    async fn update_biopori(
        &self,
        credential: &Credential,
        id: &str,
        payload: &BioporiPayload,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        let request = self
            .http
            .put(self.biopori_url(Some(id), None))
            .bearer_auth(credential.expose())
            .json(payload);
        let body = self.send(request, Auth::Bearer).await?.bytes().await?;
        Ok(decode_optional(&body))
    }

    async fn mark_full(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        self.transition(credential, id, "full").await
    }

    async fn mark_harvested(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<Option<BioporiRecord>, ClientError> {
        self.transition(credential, id, "harvested").await
    }
}
