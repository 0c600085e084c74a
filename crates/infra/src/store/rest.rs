//! REST document store adapter
//!
//! Thin client over the backend-as-a-service document API:
//!
//! - `GET    {base}/{collection}/{id}` read a document (404 when absent)
//! - `PATCH  {base}/{collection}/{id}` merge fields into a document
//! - `PUT    {base}/{collection}/{id}` create a document at a known id
//! - `POST   {base}/{collection}`      add a document with a server id
//!
//! Every failure is converted to `StoreUnavailable` at this boundary; the
//! application never sees a raw transport error.

use std::time::Duration;

use async_trait::async_trait;
use guidepath_domain::{GuidepathError, Result, StoreConfig};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use super::DocumentStore;

/// REST adapter for the external document store
pub struct RestDocumentStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestDocumentStore {
    /// Create a new store client from configuration.
    ///
    /// # Errors
    /// Returns `Config` if the HTTP client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GuidepathError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.base_url)
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("x-api-key", key),
            None => builder,
        }
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    #[instrument(skip(self), level = "debug")]
    async fn read_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let response = self
            .request(self.client.get(self.document_url(collection, id)))
            .send()
            .await
            .map_err(map_transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let fields = response.json::<Value>().await.map_err(map_transport_error)?;
                Ok(Some(fields))
            }
            status => Err(status_error("read", collection, id, status)),
        }
    }

    #[instrument(skip(self, fields), level = "debug")]
    async fn write_document_merge(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<()> {
        let response = self
            .request(self.client.patch(self.document_url(collection, id)).json(fields))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error("merge-write", collection, id, status));
        }
        debug!(collection, id, "document merge-written");
        Ok(())
    }

    #[instrument(skip(self, fields), level = "debug")]
    async fn create_document(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        let response = self
            .request(self.client.put(self.document_url(collection, id)).json(fields))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error("create", collection, id, status));
        }
        debug!(collection, id, "document created");
        Ok(())
    }

    #[instrument(skip(self, fields), level = "debug")]
    async fn add_document(&self, collection: &str, fields: &Value) -> Result<String> {
        let response = self
            .request(self.client.post(self.collection_url(collection)).json(fields))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error("add", collection, "<new>", status));
        }

        #[derive(serde::Deserialize)]
        struct AddResponse {
            id: String,
        }
        let body = response.json::<AddResponse>().await.map_err(map_transport_error)?;
        Ok(body.id)
    }
}

fn map_transport_error(err: reqwest::Error) -> GuidepathError {
    GuidepathError::StoreUnavailable(err.to_string())
}

fn status_error(op: &str, collection: &str, id: &str, status: StatusCode) -> GuidepathError {
    GuidepathError::StoreUnavailable(format!("{op} {collection}/{id} returned {status}"))
}
