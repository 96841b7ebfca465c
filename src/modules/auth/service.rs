use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use authgate_auth::TokenIssuer;
use authgate_cache::RefreshTokenStore;
use authgate_core::{AuthError, PasswordHasher};
use authgate_db::CredentialStore;
use authgate_models::{LoginTokens, UserRecord};

/// Registration, login and access-token refresh.
///
/// Per identity the service moves between "no session" and "active session
/// with refresh token T". Login always installs a fresh T, replacing any
/// previous one; refresh never changes T. Failed calls leave the state as it
/// was.
///
/// No transaction spans the credential store and the refresh-token registry.
#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
            refresh_tokens,
        }
    }

    /// Creates an account and returns an access token for it.
    ///
    /// # Errors
    ///
    /// [`AuthError::DuplicateIdentity`] if the email is already registered.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let result = async {
            if self.credentials.find_by_email(email).await?.is_some() {
                return Err(AuthError::DuplicateIdentity);
            }

            let password_hash = self.hasher.hash(password)?;
            self.credentials
                .save(UserRecord::new(email, username, password_hash))
                .await?;

            self.tokens.issue_access(email)
        }
        .await;

        match &result {
            Ok(_) => info!("User registered"),
            Err(e) => log_failure("register", e),
        }
        result
    }

    /// Checks the password and opens a new session.
    ///
    /// The new refresh token replaces whatever token was registered for the
    /// email, so a previous session can no longer refresh.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for an unknown email or a wrong
    /// password, without telling the two apart.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginTokens, AuthError> {
        let result = async {
            let user = self
                .credentials
                .find_by_email(email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?;

            if !self.hasher.verify(password, &user.password_hash)? {
                return Err(AuthError::InvalidCredentials);
            }

            let access_token = self.tokens.issue_access(email)?;
            let refresh_token = self.tokens.issue_refresh(email)?;

            self.refresh_tokens.put(email, &refresh_token).await?;

            Ok(LoginTokens {
                access_token,
                refresh_token,
            })
        }
        .await;

        match &result {
            Ok(_) => info!("User logged in"),
            Err(e) => log_failure("login", e),
        }
        result
    }

    /// Exchanges the session's refresh token for a new access token.
    ///
    /// Ownership is checked before freshness: the presented token must be the
    /// one registered for the email, and only then is it validated. The
    /// refresh token itself is not rotated.
    ///
    /// # Errors
    ///
    /// - [`AuthError::RefreshTokenMismatch`] if nothing is registered for the
    ///   email or the registered token differs from `refresh_token`
    /// - [`AuthError::RefreshTokenExpired`] if the registered token fails
    ///   signature or expiry validation
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_access_token(
        &self,
        email: &str,
        refresh_token: &str,
    ) -> Result<String, AuthError> {
        let result = async {
            match self.refresh_tokens.get(email).await? {
                Some(stored) if stored == refresh_token => {}
                _ => return Err(AuthError::RefreshTokenMismatch),
            }

            if !self.tokens.validate(refresh_token) {
                return Err(AuthError::RefreshTokenExpired);
            }

            self.tokens.issue_access(email)
        }
        .await;

        match &result {
            Ok(_) => info!("Access token refreshed"),
            Err(e) => log_failure("refresh_access_token", e),
        }
        result
    }
}

fn log_failure(operation: &'static str, err: &AuthError) {
    match err {
        AuthError::Internal(cause) => {
            error!(operation, error = %cause, "Auth operation failed");
        }
        _ => {
            warn!(operation, reason = err.kind(), "Auth operation rejected");
        }
    }
}
