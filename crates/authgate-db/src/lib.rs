//! # authgate DB
//!
//! Credential persistence for authgate.
//!
//! This crate provides the [`CredentialStore`] seam used by the auth workflow,
//! an in-memory implementation for tests and single-process use, and a
//! PostgreSQL implementation built on SQLx.
//!
//! # Example
//!
//! ```ignore
//! use authgate_config::DatabaseConfig;
//! use authgate_db::{PgCredentialStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let store = PgCredentialStore::new(pool);
//! ```

pub mod credentials;

pub use credentials::{CredentialStore, InMemoryCredentialStore, PgCredentialStore};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use authgate_config::DatabaseConfig;

/// Opens a PostgreSQL connection pool.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is not configured or the connection cannot be
/// established.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the bundled migrations (creates the `users` table).
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
