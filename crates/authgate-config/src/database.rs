//! PostgreSQL settings for the credential store.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required when the
//!   credential store is backed by PostgreSQL)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)

use std::env;

use crate::env::var_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            max_connections: var_or("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}
