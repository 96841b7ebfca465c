//! Authentication DTOs.
//!
//! Request structures carry `validator` rules that callers check before
//! handing the values to the auth workflow.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// bcrypt hashes at most 72 bytes including the trailing NUL.
const MAX_PASSWORD_BYTES: usize = 71;

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("password must be at most 71 bytes".into()));
    }
    Ok(())
}

/// Registration request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(
        length(min = 8, message = "password must be at least 8 characters"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to exchange a refresh token for a new access token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Tokens returned by a successful login.
///
/// Serialized with the keys `accessToken` and `refreshToken`. Payloads that
/// still use the legacy `refrshToken` key deserialize into the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginTokens {
    pub access_token: String,
    #[serde(alias = "refrshToken")]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_tokens_keys() {
        let tokens = LoginTokens {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };
        let value = serde_json::to_value(&tokens).unwrap();
        assert_eq!(value["accessToken"], "a");
        assert_eq!(value["refreshToken"], "r");
        assert!(value.get("refrshToken").is_none());
    }

    #[test]
    fn test_login_tokens_accept_legacy_key() {
        let json = r#"{"accessToken":"a","refrshToken":"r"}"#;
        let tokens: LoginTokens = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.refresh_token, "r");
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            email: "a@x.com".to_string(),
            username: "alice".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid.clone()
        };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let empty_username = RegisterRequest {
            username: String::new(),
            ..valid
        };
        assert!(empty_username.validate().is_err());
    }

    #[test]
    fn test_register_request_password_byte_limit() {
        let request = RegisterRequest {
            email: "a@x.com".to_string(),
            username: "alice".to_string(),
            password: "x".repeat(71),
        };
        assert!(request.validate().is_ok());

        // 24 three-byte characters: 24 chars, 72 bytes.
        let multibyte = RegisterRequest {
            password: "密".repeat(24),
            ..request.clone()
        };
        let errors = multibyte.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_request_requires_password() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_refresh_request_requires_token() {
        let request = RefreshTokenRequest {
            email: "a@x.com".to_string(),
            refresh_token: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
