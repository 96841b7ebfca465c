use std::sync::Arc;

use authgate::authgate_auth::JwtTokenIssuer;
use authgate::authgate_cache::InMemoryRefreshTokenStore;
use authgate::authgate_config::JwtConfig;
use authgate::authgate_core::BcryptHasher;
use authgate::authgate_db::{InMemoryCredentialStore, PgCredentialStore, PgPool};
use authgate::modules::auth::AuthService;
use uuid::Uuid;

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
    }
}

#[allow(dead_code)]
/// Workflow over in-memory stores, with the cheapest bcrypt cost.
pub fn setup_test_service(jwt_config: JwtConfig) -> AuthService {
    AuthService::new(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(BcryptHasher::with_cost(4)),
        Arc::new(JwtTokenIssuer::new(jwt_config)),
        Arc::new(InMemoryRefreshTokenStore::new()),
    )
}

#[allow(dead_code)]
/// Workflow over the `users` table and an in-memory refresh-token registry.
pub fn setup_pg_service(pool: PgPool, jwt_config: JwtConfig) -> AuthService {
    AuthService::new(
        Arc::new(PgCredentialStore::new(pool)),
        Arc::new(BcryptHasher::with_cost(4)),
        Arc::new(JwtTokenIssuer::new(jwt_config)),
        Arc::new(InMemoryRefreshTokenStore::new()),
    )
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
