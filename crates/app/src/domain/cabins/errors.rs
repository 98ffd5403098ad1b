//! Cabins service errors.

use thiserror::Error;

use crate::{domain::cabins::validation::ValidationErrors, storage::BlobStoreError};

/// Cabin operation failures.
///
/// The display text of each variant is suitable for showing to the person who
/// triggered the operation; the underlying store error is kept as the source.
#[derive(Debug, Error)]
pub enum CabinsServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Unable to fetch cabins")]
    RecordQuery(#[source] sqlx::Error),

    #[error("Unable to create cabin")]
    RecordCreate(#[source] sqlx::Error),

    #[error("Cabin image could not be uploaded and the cabin was not created.")]
    ImageUpload(#[source] BlobStoreError),

    #[error("Unable to delete cabin")]
    RecordDelete(#[source] sqlx::Error),

    #[error("Cabin not found")]
    NotFound,
}
