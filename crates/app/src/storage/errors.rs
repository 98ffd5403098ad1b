//! Blob store errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the blob store.
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured storage URL cannot carry object paths.
    #[error("invalid storage url: {0}")]
    InvalidUrl(String),

    /// The blob store answered with a non-2xx status.
    #[error("unexpected response from blob store ({0}): {1}")]
    UnexpectedResponse(StatusCode, String),
}
