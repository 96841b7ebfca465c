use serde::Serialize;

/// A registered user as held by the credential store.
///
/// The email is the identity: unique, and the key for sessions. Records are
/// immutable once saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UserRecord {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl UserRecord {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
