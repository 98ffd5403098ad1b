use cabins_app::{config::DatabaseConfig, database};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<String, String> {
    let pool = database::connect(&args.database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let migrations = database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    pool.close().await;

    Ok(format!("database is up to date ({migrations} migrations)\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_database_url_is_reported() {
        let result = run(MigrateArgs {
            database: DatabaseConfig {
                database_url: "not a database url".to_string(),
            },
        })
        .await;

        assert!(
            result
                .as_ref()
                .is_err_and(|error| error.starts_with("failed to connect to database")),
            "expected a connection error, got {result:?}"
        );
    }
}
