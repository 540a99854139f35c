//! Persistence layer for the Confera platform.
//!
//! Exposes the connection-pool helpers plus the model and repository
//! modules. Repositories are zero-sized structs with async query methods
//! taking `&PgPool` as their first argument.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool type used across crates.
pub type DbPool = PgPool;

/// Maximum number of connections in the pool.
const MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::debug!("Applying database migrations");
    sqlx::migrate!("../../db/migrations").run(pool).await
}
