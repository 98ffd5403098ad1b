//! Cabins Service

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, error, info, warn};

use crate::{
    domain::cabins::{
        data::{CabinForm, CabinImage, CabinInput, NewCabin},
        errors::CabinsServiceError,
        images::ImageLocation,
        records::{CabinId, CabinRecord},
        repository::RecordStore,
        validation::validate,
    },
    storage::BlobStore,
};

/// Cabins service backed by a record store for rows and a blob store for photos.
#[derive(Clone)]
pub struct StoreCabinsService {
    records: Arc<dyn RecordStore>,
    blobs: Arc<dyn BlobStore>,
    images: ImageLocation,
}

impl Debug for StoreCabinsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreCabinsService")
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

impl StoreCabinsService {
    #[must_use]
    pub fn new(
        records: Arc<dyn RecordStore>,
        blobs: Arc<dyn BlobStore>,
        images: ImageLocation,
    ) -> Self {
        Self {
            records,
            blobs,
            images,
        }
    }

    /// Creates a cabin from already validated input.
    ///
    /// The record is inserted first with the photo's public URL, then the
    /// photo is uploaded. When the upload fails the inserted record is
    /// deleted again, so callers either get a complete cabin or an error.
    /// If that delete fails too the record is left behind and only logged.
    #[tracing::instrument(
        name = "cabins.service.create_validated_cabin",
        skip(self, input),
        fields(
            cabin_id = tracing::field::Empty,
            object_name = tracing::field::Empty
        )
    )]
    pub async fn create_validated_cabin(
        &self,
        input: CabinInput,
    ) -> Result<CabinRecord, CabinsServiceError> {
        let object_name = ImageLocation::object_name(&input.image.file_name);
        let image_path = self.images.public_url(&object_name);

        let span = Span::current();

        span.record("object_name", tracing::field::display(&object_name));

        let created = self
            .records
            .insert_cabin(NewCabin::from_input(&input, image_path))
            .await
            .map_err(|source| {
                error!("failed to create cabin: {source}");

                CabinsServiceError::RecordCreate(source)
            })?;

        span.record("cabin_id", tracing::field::display(created.id));

        let CabinImage {
            content_type,
            bytes,
            ..
        } = input.image;

        if let Err(source) = self
            .blobs
            .upload(self.images.bucket(), &object_name, bytes, &content_type)
            .await
        {
            error!("failed to upload cabin image: {source}");

            self.remove_incomplete_cabin(created.id).await;

            return Err(CabinsServiceError::ImageUpload(source));
        }

        info!(cabin_id = %created.id, "created cabin");

        Ok(created)
    }

    async fn remove_incomplete_cabin(&self, cabin: CabinId) {
        match self.records.delete_cabin(cabin).await {
            Ok(0) => warn!(cabin_id = %cabin, "incomplete cabin was already gone"),
            Ok(_) => info!(cabin_id = %cabin, "removed cabin without image"),
            Err(source) => {
                warn!(cabin_id = %cabin, "failed to remove cabin without image: {source}");
            }
        }
    }
}

#[async_trait]
impl CabinsService for StoreCabinsService {
    #[tracing::instrument(name = "cabins.service.list_cabins", skip(self))]
    async fn list_cabins(&self) -> Result<Vec<CabinRecord>, CabinsServiceError> {
        self.records.select_cabins().await.map_err(|source| {
            error!("failed to fetch cabins: {source}");

            CabinsServiceError::RecordQuery(source)
        })
    }

    #[tracing::instrument(name = "cabins.service.create_cabin", skip(self, form))]
    async fn create_cabin(&self, form: CabinForm) -> Result<CabinRecord, CabinsServiceError> {
        let input = validate(&form)?;

        self.create_validated_cabin(input).await
    }

    #[tracing::instrument(name = "cabins.service.delete_cabin", skip(self), fields(cabin_id = %cabin))]
    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), CabinsServiceError> {
        let rows_affected = self.records.delete_cabin(cabin).await.map_err(|source| {
            error!("failed to delete cabin: {source}");

            CabinsServiceError::RecordDelete(source)
        })?;

        if rows_affected == 0 {
            return Err(CabinsServiceError::NotFound);
        }

        info!("deleted cabin");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CabinsService: Send + Sync {
    /// Retrieves all cabins.
    async fn list_cabins(&self) -> Result<Vec<CabinRecord>, CabinsServiceError>;

    /// Validates the form and creates the cabin together with its photo.
    async fn create_cabin(&self, form: CabinForm) -> Result<CabinRecord, CabinsServiceError>;

    /// Deletes a cabin by id.
    async fn delete_cabin(&self, cabin: CabinId) -> Result<(), CabinsServiceError>;
}
