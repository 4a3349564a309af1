//! PostgreSQL connection pool and schema migrations.

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;

/// Migrations embedded from `./migrations` at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool using the pool settings from `config`.
///
/// `DB_SSL_MODE`, when set, overrides any `sslmode` in the connection string.
///
/// # Errors
///
/// Returns an error if the connection string or SSL mode is invalid, or if
/// the first connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let mut options = PgConnectOptions::from_str(&config.database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;

    if let Some(mode) = &config.db_ssl_mode {
        let mode = PgSslMode::from_str(mode)
            .with_context(|| format!("Unsupported DB_SSL_MODE '{mode}'"))?;
        options = options.ssl_mode(mode);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies pending migrations.
///
/// Safe to run on every start: applied migrations are skipped and the schema
/// itself is created with `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error if a migration fails or the migration history is
/// inconsistent with the embedded files.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(())
}
