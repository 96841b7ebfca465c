//! Token signing settings.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HS256 signing secret
//! - `JWT_ACCESS_EXPIRY`: access token lifetime in seconds (default: 3600)
//! - `JWT_REFRESH_EXPIRY`: refresh token lifetime in seconds (default: 604800)

use std::env;

use tracing::warn;

use crate::env::var_or;

const DEFAULT_SECRET: &str = "authgate-dev-secret-change-me";
const DEFAULT_ACCESS_EXPIRY: i64 = 60 * 60;
const DEFAULT_REFRESH_EXPIRY: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds. A non-positive value issues tokens that are already expired.
    pub access_token_expiry: i64,
    /// Seconds. Should exceed `access_token_expiry`.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set, signing tokens with the development secret");
                DEFAULT_SECRET.to_string()
            }
        };

        Self {
            secret,
            access_token_expiry: var_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY),
            refresh_token_expiry: var_or("JWT_REFRESH_EXPIRY", DEFAULT_REFRESH_EXPIRY),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_token_expiry: DEFAULT_ACCESS_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_EXPIRY,
        }
    }
}
