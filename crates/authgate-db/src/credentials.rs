//! Credential store implementations.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sqlx::PgPool;
use tracing::{debug, instrument};

use authgate_core::AuthError;
use authgate_models::UserRecord;

/// Persistence for user records, keyed by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;

    /// Persists a new record.
    ///
    /// Implementations enforce email uniqueness and return
    /// [`AuthError::DuplicateIdentity`] when the email is taken, which covers
    /// two registrations racing past the workflow's existence check.
    async fn save(&self, user: UserRecord) -> Result<(), AuthError>;
}

/// Process-local credential store.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: DashMap<String, UserRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user: UserRecord) -> Result<(), AuthError> {
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AuthError::DuplicateIdentity),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }
}

/// PostgreSQL-backed credential store over the `users` table.
#[derive(Clone, Debug)]
pub struct PgCredentialStore {
    db: PgPool,
}

impl PgCredentialStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT email, username, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(AuthError::internal)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn save(&self, user: UserRecord) -> Result<(), AuthError> {
        let result = sqlx::query(
            "INSERT INTO users (email, username, password_hash) VALUES ($1, $2, $3)",
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .execute(&self.db)
        .await;

        match result {
            Ok(_) => {
                debug!("User row inserted");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::DuplicateIdentity)
            }
            Err(e) => Err(AuthError::internal(e)),
        }
    }
}
