//! Database connection management

use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply every pending migration, returning the number of bundled migrations
/// (all of which are applied afterwards).
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history no longer
/// matches the bundled migrations.
pub async fn migrate(pool: &PgPool) -> Result<usize, MigrateError> {
    MIGRATOR.run(pool).await?;

    Ok(MIGRATOR.iter().count())
}
