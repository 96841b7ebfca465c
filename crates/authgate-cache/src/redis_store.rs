//! Redis-backed refresh-token registry.
//!
//! Each entry is stored under `{prefix}:{email}` with a TTL of the
//! refresh-token lifetime plus [`ENTRY_TTL_MARGIN`], so sessions nobody
//! refreshes disappear on their own. The margin keeps an entry around after
//! its token stops validating, so a late refresh is rejected as expired and
//! not as unknown. `SET EX` replaces any previous value atomically.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, error, instrument};

use authgate_config::RefreshStoreConfig;
use authgate_core::AuthError;

use crate::store::RefreshTokenStore;

/// Extra lifetime of a registry entry past its token's expiry. Must exceed
/// the token validation leeway.
pub const ENTRY_TTL_MARGIN: Duration = Duration::from_secs(3600);

/// Registry TTL for tokens that live `token_lifetime_secs` seconds.
pub fn entry_ttl(token_lifetime_secs: i64) -> Duration {
    Duration::from_secs(token_lifetime_secs.max(0) as u64) + ENTRY_TTL_MARGIN
}

/// Error type for Redis registry operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::internal(err)
    }
}

/// Refresh-token registry in Redis, shared by every process pointing at the
/// same instance.
#[derive(Clone)]
pub struct RedisRefreshTokenStore {
    conn: ConnectionManager,
    config: RefreshStoreConfig,
    ttl: Duration,
}

impl std::fmt::Debug for RedisRefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisRefreshTokenStore")
            .field("key_prefix", &self.config.key_prefix)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl RedisRefreshTokenStore {
    /// Connects to Redis.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the URL is invalid or the
    /// connection fails.
    pub async fn new(config: &RefreshStoreConfig, ttl: Duration) -> Result<Self, StoreError> {
        let client = Client::open(config.redis_url.as_str())?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            config: config.clone(),
            ttl,
        })
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }

    async fn put_raw(&self, key: &str, refresh_token: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        // Redis rejects SET EX 0.
        let ttl_secs = self.ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, refresh_token, ttl_secs).await?;
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for RedisRefreshTokenStore {
    #[instrument(skip(self), fields(store.operation = "GET"))]
    async fn get(&self, email: &str) -> Result<Option<String>, AuthError> {
        let key = self.config.prefixed_key(email);

        match self.get_raw(&key).await {
            Ok(value) => {
                debug!(store.key = %key, found = value.is_some(), "Refresh token lookup");
                Ok(value)
            }
            Err(e) => {
                error!(store.key = %key, error = %e, "Redis GET error");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, refresh_token), fields(store.operation = "SETEX"))]
    async fn put(&self, email: &str, refresh_token: &str) -> Result<(), AuthError> {
        let key = self.config.prefixed_key(email);

        match self.put_raw(&key, refresh_token).await {
            Ok(()) => {
                debug!(store.key = %key, store.ttl_secs = %self.ttl.as_secs(), "Refresh token stored");
                Ok(())
            }
            Err(e) => {
                error!(store.key = %key, error = %e, "Redis SETEX error");
                Err(e.into())
            }
        }
    }
}
