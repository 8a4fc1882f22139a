//! Database layer: connection pool, schema migrations, models, and
//! repositories for the restaurant listing service.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Embedded schema migrations, applied in version order and tracked in the
/// `_sqlx_migrations` ledger table so each step runs at most once per store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../db/migrations");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations.
///
/// A rejected DDL statement (e.g. an existing value longer than a new
/// column bound) rolls back that step without writing its ledger row; the
/// error propagates to the caller, which must treat it as fatal.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Schema migrations up to date");
    Ok(())
}
