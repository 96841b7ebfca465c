//! # authgate Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetimes
//! - [`database`]: PostgreSQL connection settings for the credential store
//! - [`store`]: refresh-token registry backend selection and Redis settings
//!
//! # Example
//!
//! ```ignore
//! use authgate_config::{DatabaseConfig, JwtConfig, RefreshStoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let store_config = RefreshStoreConfig::from_env();
//! ```

pub mod database;
mod env;
pub mod jwt;
pub mod store;

pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use store::{RefreshStoreBackend, RefreshStoreConfig};
