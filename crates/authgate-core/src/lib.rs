//! # authgate Core
//!
//! Core types shared by every authgate crate.
//!
//! - [`errors`]: the [`AuthError`] taxonomy returned by the auth workflow
//! - [`password`]: bcrypt password hashing behind the [`PasswordHasher`] trait
//!
//! # Example
//!
//! ```ignore
//! use authgate_core::{AuthError, BcryptHasher, PasswordHasher};
//!
//! let hasher = BcryptHasher::default();
//! let hash = hasher.hash("secure_password")?;
//! assert!(hasher.verify("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::AuthError;
pub use password::{BcryptHasher, MAX_PASSWORD_BYTES, PasswordHasher};
