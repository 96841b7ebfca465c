//! Error taxonomy for the authentication workflow.
//!
//! Every failure the workflow can surface has its own variant so callers can
//! map it to the right response. Collaborator failures (database, Redis,
//! hashing, token encoding) are wrapped in [`AuthError::Internal`].

/// Errors returned by registration, login and token refresh.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email is already registered.
    #[error("Email is already registered")]
    DuplicateIdentity,

    /// Unknown email or wrong password. The two cases are deliberately
    /// reported with the same variant and message.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No refresh token is registered for the email, or the presented token
    /// is not the one currently registered.
    #[error("Refresh token is not valid for this account")]
    RefreshTokenMismatch,

    /// The presented refresh token is the registered one but failed
    /// signature or expiry validation.
    #[error("Refresh token has expired")]
    RefreshTokenExpired,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    /// HTTP status code a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateIdentity => 409,
            Self::InvalidCredentials | Self::RefreshTokenMismatch | Self::RefreshTokenExpired => {
                401
            }
            Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity => "duplicate_identity",
            Self::InvalidCredentials => "invalid_credentials",
            Self::RefreshTokenMismatch => "refresh_token_mismatch",
            Self::RefreshTokenExpired => "refresh_token_expired",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::DuplicateIdentity.status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::RefreshTokenMismatch.status_code(), 401);
        assert_eq!(AuthError::RefreshTokenExpired.status_code(), 401);
        assert_eq!(
            AuthError::internal(anyhow::anyhow!("boom")).status_code(),
            500
        );
    }

    #[test]
    fn test_internal_is_transparent() {
        let err = AuthError::internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.kind(), "internal");
    }

    #[test]
    fn test_credentials_message_does_not_name_the_cause() {
        let msg = AuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "Invalid email or password");
    }
}
