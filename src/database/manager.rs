use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::{AppConfig, ConfigError};

/// Errors from the data-access layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the connection pool for the Supabase Postgres database.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let url = config.database_url()?;
    let pool = pool_options(config).connect(url).await?;

    info!(
        "Connected database pool (max {} connections)",
        config.database.max_connections
    );
    Ok(pool)
}

/// Pool that opens connections on first use. Lets the server come up, and
/// serve unauthenticated utility routes, while the database is still starting.
pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, ConfigError> {
    let url = config.database_url()?;
    pool_options(config)
        .connect_lazy(url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: "<unparseable connection string>".to_string(),
        })
}

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Close the pool (e.g., on shutdown)
pub async fn close(pool: &PgPool) {
    pool.close().await;
    info!("Closed database pool");
}
