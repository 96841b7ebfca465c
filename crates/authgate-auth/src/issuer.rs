use authgate_config::JwtConfig;
use authgate_core::AuthError;

use crate::jwt::{create_access_token, create_refresh_token, verify_refresh_token};

/// Token issuance and validation as seen by the auth workflow.
///
/// Tokens are opaque to the workflow; it only issues them for an identity
/// (the user's email) and asks whether a presented refresh token is still
/// valid.
pub trait TokenIssuer: Send + Sync {
    fn issue_access(&self, identity: &str) -> Result<String, AuthError>;

    fn issue_refresh(&self, identity: &str) -> Result<String, AuthError>;

    /// Checks signature, expiry and that `token` is a refresh token.
    fn validate(&self, token: &str) -> bool;
}

/// [`TokenIssuer`] backed by HS256 JWTs.
#[derive(Clone, Debug)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_access(&self, identity: &str) -> Result<String, AuthError> {
        create_access_token(identity, &self.config)
    }

    fn issue_refresh(&self, identity: &str) -> Result<String, AuthError> {
        create_refresh_token(identity, &self.config)
    }

    fn validate(&self, token: &str) -> bool {
        verify_refresh_token(token, &self.config).is_ok()
    }
}
