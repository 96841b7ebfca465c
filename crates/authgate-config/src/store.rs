//! Refresh-token registry configuration.
//!
//! The registry maps an email to the one refresh token currently accepted for
//! it. It can live in process memory or in Redis.
//!
//! # Environment Variables
//!
//! - `REFRESH_TOKEN_BACKEND`: `memory` or `redis` (default: `memory`)
//! - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
//! - `REFRESH_TOKEN_PREFIX`: key prefix for registry entries (default: `authgate:refresh`)

use std::env;
use std::str::FromStr;

use crate::env::var_or;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RefreshStoreBackend {
    #[default]
    Memory,
    Redis,
}

impl FromStr for RefreshStoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("Unknown refresh token backend: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshStoreConfig {
    pub backend: RefreshStoreBackend,
    pub redis_url: String,
    pub key_prefix: String,
}

impl RefreshStoreConfig {
    /// Unknown backend names are logged and fall back to
    /// [`RefreshStoreBackend::Memory`].
    pub fn from_env() -> Self {
        Self {
            backend: var_or("REFRESH_TOKEN_BACKEND", RefreshStoreBackend::default()),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            key_prefix: env::var("REFRESH_TOKEN_PREFIX")
                .unwrap_or_else(|_| "authgate:refresh".into()),
        }
    }

    /// Build the registry key for an email.
    ///
    /// ```ignore
    /// let key = RefreshStoreConfig::default().prefixed_key("a@x.com");
    /// // "authgate:refresh:a@x.com"
    /// ```
    pub fn prefixed_key(&self, email: &str) -> String {
        format!("{}:{}", self.key_prefix, email)
    }
}

impl Default for RefreshStoreConfig {
    fn default() -> Self {
        Self {
            backend: RefreshStoreBackend::Memory,
            redis_url: "redis://127.0.0.1:6379".into(),
            key_prefix: "authgate:refresh".into(),
        }
    }
}
