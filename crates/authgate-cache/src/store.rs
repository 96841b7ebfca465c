use async_trait::async_trait;
use dashmap::DashMap;

use authgate_core::AuthError;

/// Registry of the currently valid refresh token per email.
///
/// `put` overwrites unconditionally: a new login always supersedes the
/// previous session. Per-key reads and writes must be linearizable; nothing
/// spans more than one key.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn get(&self, email: &str) -> Result<Option<String>, AuthError>;

    async fn put(&self, email: &str, refresh_token: &str) -> Result<(), AuthError>;
}

/// Registry held in process memory. Entries are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: DashMap<String, String>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn get(&self, email: &str) -> Result<Option<String>, AuthError> {
        Ok(self.tokens.get(email).map(|entry| entry.value().clone()))
    }

    async fn put(&self, email: &str, refresh_token: &str) -> Result<(), AuthError> {
        self.tokens
            .insert(email.to_string(), refresh_token.to_string());
        Ok(())
    }
}
