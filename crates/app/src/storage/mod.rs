//! Object storage for uploaded files.

mod errors;
pub mod http;

use async_trait::async_trait;
use mockall::automock;

pub use errors::BlobStoreError;
pub use http::{HttpBlobStore, HttpBlobStoreConfig};

/// Named binary object storage, organised in buckets.
#[automock]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` as `object_name` in `bucket`. Existing objects are
    /// never overwritten.
    async fn upload(
        &self,
        bucket: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError>;
}
