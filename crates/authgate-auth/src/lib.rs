//! # authgate Auth
//!
//! JWT claims and token utilities for authgate.
//!
//! - [`claims`]: claim structures for access and refresh tokens
//! - [`jwt`]: token creation and verification functions
//! - [`issuer`]: the [`TokenIssuer`] seam used by the auth workflow and its
//!   JWT implementation [`JwtTokenIssuer`]
//!
//! Both token kinds are HS256 JWTs whose subject is the user's email. They
//! carry a `token_type` claim so one kind is never accepted in place of the
//! other.
//!
//! # Example
//!
//! ```ignore
//! use authgate_auth::{JwtTokenIssuer, TokenIssuer};
//! use authgate_config::JwtConfig;
//!
//! let issuer = JwtTokenIssuer::new(JwtConfig::from_env());
//! let refresh = issuer.issue_refresh("user@example.com")?;
//! assert!(issuer.validate(&refresh));
//! ```

pub mod claims;
pub mod issuer;
pub mod jwt;

pub use claims::{Claims, RefreshTokenClaims, TokenType};
pub use issuer::{JwtTokenIssuer, TokenIssuer};
pub use jwt::{
    TokenError, create_access_token, create_refresh_token, verify_access_token,
    verify_refresh_token,
};
