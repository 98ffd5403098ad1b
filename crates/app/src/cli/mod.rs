use std::error::Error as _;

use cabins_app::{
    config::{DatabaseConfig, LoggingConfig, StorageConfig},
    context::AppContext,
};
use clap::{Args, Parser, Subcommand};

mod cabin;
mod db;

#[derive(Debug, Parser)]
#[command(name = "cabins-app", about = "Cabin administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cabin(cabin::CabinCommand),
    Db(db::DbCommand),
}

/// Settings every command needs to reach the stores.
#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    storage: StorageConfig,
}

impl StoreArgs {
    pub(crate) async fn connect(&self) -> Result<AppContext, String> {
        AppContext::from_config(&self.database, &self.storage)
            .await
            .map_err(|error| match error.source() {
                Some(source) => format!("{error}: {source}"),
                None => error.to_string(),
            })
    }
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Runs the selected command, returning what it wants printed.
    pub(crate) async fn run(self) -> Result<String, String> {
        match self.command {
            Commands::Cabin(command) => cabin::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
