//! JWT (JSON Web Token) utilities.
//!
//! Creates and verifies the two token kinds used by authgate:
//!
//! - **Access tokens**: short-lived, authorize API calls
//! - **Refresh tokens**: long-lived, exchanged for new access tokens
//!
//! Lifetimes come from [`JwtConfig`]. Verification checks the signature, the
//! expiry (with the default 60 second leeway of `jsonwebtoken`) and the
//! `token_type` claim.
//!
//! # Example
//!
//! ```ignore
//! use authgate_auth::{create_access_token, verify_access_token};
//! use authgate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("user@example.com", &config)?;
//! let claims = verify_access_token(&token, &config)?;
//! assert_eq!(claims.sub, "user@example.com");
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use authgate_config::JwtConfig;
use authgate_core::AuthError;

use crate::claims::{Claims, RefreshTokenClaims, TokenType};

/// Reasons a presented token is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or expired token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Expected a {expected:?} token")]
    WrongType { expected: TokenType },
}

/// Returns `(iat, exp)` for a token living `lifetime_secs` from now.
///
/// A negative lifetime yields a token that is already expired.
fn timestamps(lifetime_secs: i64) -> (usize, usize) {
    let now = Utc::now().timestamp();
    let exp = now.saturating_add(lifetime_secs).max(0);
    (now as usize, exp as usize)
}

/// Creates an access token bound to `email`.
///
/// # Errors
///
/// Returns [`AuthError::Internal`] if encoding fails.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let (iat, exp) = timestamps(jwt_config.access_token_expiry);

    let claims = Claims {
        sub: email.to_string(),
        token_type: TokenType::Access,
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns [`TokenError::Invalid`] for a bad signature, an expired or
/// malformed token, and [`TokenError::WrongType`] for a refresh token.
pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )?
    .claims;

    if claims.token_type != TokenType::Access {
        return Err(TokenError::WrongType {
            expected: TokenType::Access,
        });
    }

    Ok(claims)
}

/// Creates a refresh token bound to `email`.
///
/// Every call yields a distinct token (`jti` is random), which is what lets a
/// new login supersede the previous session's refresh token.
///
/// # Errors
///
/// Returns [`AuthError::Internal`] if encoding fails.
pub fn create_refresh_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let (iat, exp) = timestamps(jwt_config.refresh_token_expiry);

    let claims = RefreshTokenClaims {
        sub: email.to_string(),
        token_type: TokenType::Refresh,
        exp,
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::internal(anyhow!("Failed to create refresh token: {}", e)))
}

/// Verifies a refresh token and returns the claims.
///
/// # Errors
///
/// Same as [`verify_access_token`], with the token type reversed.
pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, TokenError> {
    let claims = decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )?
    .claims;

    if claims.token_type != TokenType::Refresh {
        return Err(TokenError::WrongType {
            expected: TokenType::Refresh,
        });
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 604800,
        }
    }

    #[test]
    fn test_verify_access_token_success() {
        let config = get_test_jwt_config();

        let token = create_access_token("test@example.com", &config).unwrap();
        let claims = verify_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "test@example.com");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let result = verify_access_token("invalid-token", &config);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token("test@example.com", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            ..get_test_jwt_config()
        };

        assert!(verify_access_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_refresh_token_success() {
        let config = get_test_jwt_config();

        let token = create_refresh_token("test@example.com", &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "test@example.com");
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let config = get_test_jwt_config();

        let access = create_access_token("test@example.com", &config).unwrap();
        let refresh = create_refresh_token("test@example.com", &config).unwrap();

        assert!(matches!(
            verify_refresh_token(&access, &config),
            Err(TokenError::WrongType { .. }) | Err(TokenError::Invalid(_))
        ));
        assert!(matches!(
            verify_access_token(&refresh, &config),
            Err(TokenError::WrongType { .. })
        ));
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let config = get_test_jwt_config();

        let first = create_refresh_token("test@example.com", &config).unwrap();
        let second = create_refresh_token("test@example.com", &config).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_expired_refresh_token_rejected() {
        let config = JwtConfig {
            refresh_token_expiry: -3600,
            ..get_test_jwt_config()
        };

        let token = create_refresh_token("test@example.com", &config).unwrap();
        assert!(matches!(
            verify_refresh_token(&token, &config),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_refresh_token_expiry_longer_than_access() {
        let config = get_test_jwt_config();

        let access = create_access_token("test@example.com", &config).unwrap();
        let refresh = create_refresh_token("test@example.com", &config).unwrap();

        let access_claims = verify_access_token(&access, &config).unwrap();
        let refresh_claims = verify_refresh_token(&refresh, &config).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
    }
}
