//! Configuration shared by the binary's commands.

use clap::Args;
use zeroize::Zeroizing;

use crate::{domain::cabins::images::ImageLocation, storage::HttpBlobStoreConfig};

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}

/// Object storage settings.
#[derive(Args)]
pub struct StorageConfig {
    /// Storage API root, e.g. `https://project.example.co/storage/v1`
    #[arg(long, env = "STORAGE_URL")]
    pub storage_url: String,

    /// Bucket cabin photos are uploaded to
    #[arg(long, env = "STORAGE_BUCKET", default_value = "cabin-images")]
    pub storage_bucket: String,

    /// Storage service key
    #[arg(long, env = "STORAGE_KEY", hide_env_values = true)]
    pub storage_key: String,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("storage_url", &self.storage_url)
            .field("storage_bucket", &self.storage_bucket)
            .finish_non_exhaustive()
    }
}

impl StorageConfig {
    /// Base URL public objects are served from.
    #[must_use]
    pub fn public_base_url(&self) -> String {
        format!("{}/object/public", self.storage_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn image_location(&self) -> ImageLocation {
        ImageLocation::new(self.public_base_url(), self.storage_bucket.clone())
    }

    #[must_use]
    pub fn blob_store_config(&self) -> HttpBlobStoreConfig {
        HttpBlobStoreConfig {
            url: self.storage_url.clone(),
            key: Zeroizing::new(self.storage_key.clone()),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}
