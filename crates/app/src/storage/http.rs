//! HTTP object storage client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::storage::{BlobStore, BlobStoreError};

/// Configuration for connecting to the object storage API.
#[derive(Clone)]
pub struct HttpBlobStoreConfig {
    /// Storage API root, e.g. `"https://project.example.co/storage/v1"`.
    pub url: String,

    /// Service key sent as bearer token and `apikey` header.
    pub key: Zeroizing<String>,
}

impl Debug for HttpBlobStoreConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("HttpBlobStoreConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the object storage REST API.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    config: HttpBlobStoreConfig,
    http: Client,
}

impl HttpBlobStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: HttpBlobStoreConfig) -> Self {
        Self {
            config: HttpBlobStoreConfig {
                url: config.url.trim_end_matches('/').to_string(),
                key: config.key,
            },
            http: Client::new(),
        }
    }

    /// `{url}/object/{bucket}/{object_name}`, with the bucket and object name
    /// percent-encoded as single path segments.
    fn object_url(&self, bucket: &str, object_name: &str) -> Result<Url, BlobStoreError> {
        let invalid = || BlobStoreError::InvalidUrl(self.config.url.clone());

        let mut url = Url::parse(&self.config.url).map_err(|_parse_error| invalid())?;

        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push("object")
            .push(bucket)
            .push(object_name);

        Ok(url)
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError> {
        let response = self
            .http
            .post(self.object_url(bucket, object_name)?)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.key.as_str()))
            .header("apikey", self.config.key.as_str())
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(BlobStoreError::UnexpectedResponse(
                status,
                error_message(text),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Storage errors usually arrive as `{"error": ..., "message": ...}`; keep the
/// raw body for anything else.
fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body).map_or(body, |parsed| parsed.message)
}
