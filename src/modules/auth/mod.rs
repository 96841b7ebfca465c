//! Authentication workflow: register, login, refresh access token.

pub mod service;

pub use service::AuthService;
