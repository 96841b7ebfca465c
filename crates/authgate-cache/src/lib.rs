//! # authgate Cache
//!
//! The refresh-token registry: a mapping from email to the one refresh token
//! currently accepted for that identity.
//!
//! This crate provides:
//! - the [`RefreshTokenStore`] trait the auth workflow depends on
//! - [`InMemoryRefreshTokenStore`], a concurrent map living for the process lifetime
//! - [`RedisRefreshTokenStore`], a durable backend with per-entry TTL
//!
//! # Example
//!
//! ```ignore
//! use authgate_cache::{RedisRefreshTokenStore, RefreshTokenStore, entry_ttl};
//! use authgate_config::RefreshStoreConfig;
//!
//! let config = RefreshStoreConfig::from_env();
//! let store = RedisRefreshTokenStore::new(&config, entry_ttl(604800)).await?;
//!
//! store.put("user@example.com", &refresh_token).await?;
//! let current = store.get("user@example.com").await?;
//! ```

pub mod redis_store;
pub mod store;

pub use redis_store::{ENTRY_TTL_MARGIN, RedisRefreshTokenStore, StoreError, entry_ttl};
pub use store::{InMemoryRefreshTokenStore, RefreshTokenStore};
