//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::{DatabaseConfig, StorageConfig},
    database,
    domain::cabins::{CabinsService, StoreCabinsService, repository::PgCabinsRepository},
    storage::HttpBlobStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub cabins: Arc<dyn CabinsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from database and storage settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_config(
        database: &DatabaseConfig,
        storage: &StorageConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(&database.database_url)
            .await
            .map_err(AppInitError::Database)?;

        let cabins = StoreCabinsService::new(
            Arc::new(PgCabinsRepository::new(pool)),
            Arc::new(HttpBlobStore::new(storage.blob_store_config())),
            storage.image_location(),
        );

        Ok(Self {
            cabins: Arc::new(cabins),
        })
    }
}
