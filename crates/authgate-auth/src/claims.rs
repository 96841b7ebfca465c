//! JWT claim structures.
//!
//! - [`Claims`]: access token claims
//! - [`RefreshTokenClaims`]: refresh token claims

use serde::{Deserialize, Serialize};

/// Distinguishes access tokens from refresh tokens signed with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User's email (subject claim)
    pub sub: String,
    pub token_type: TokenType,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// JWT claims for refresh tokens.
///
/// Refresh tokens are long-lived and exchanged for new access tokens without
/// re-entering the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// User's email (subject claim)
    pub sub: String,
    pub token_type: TokenType,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Unique token identifier; two logins in the same second still get
    /// different refresh tokens.
    pub jti: String,
}
