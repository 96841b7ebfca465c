//! # authgate Models
//!
//! Domain models and DTOs for authgate.
//!
//! - [`users`]: the persisted [`UserRecord`]
//! - [`auth`]: request DTOs with validation rules and the [`LoginTokens`] result
//!
//! # Example
//!
//! ```ignore
//! use authgate_models::{LoginRequest, LoginTokens};
//! use validator::Validate;
//!
//! let request = LoginRequest { email: "a@x.com".into(), password: "pw1".into() };
//! request.validate()?;
//! ```

pub mod auth;
pub mod users;

pub use auth::{LoginRequest, LoginTokens, RefreshTokenRequest, RegisterRequest};
pub use users::UserRecord;
