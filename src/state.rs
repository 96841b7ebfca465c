use std::sync::Arc;

use authgate_auth::JwtTokenIssuer;
use authgate_cache::{
    InMemoryRefreshTokenStore, RedisRefreshTokenStore, RefreshTokenStore, entry_ttl,
};
use authgate_config::{JwtConfig, RefreshStoreBackend, RefreshStoreConfig};
use authgate_core::BcryptHasher;
use authgate_db::{CredentialStore, InMemoryCredentialStore, PgCredentialStore, PgPool};

use crate::modules::auth::AuthService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthService,
    pub jwt_config: JwtConfig,
    pub store_config: RefreshStoreConfig,
}

/// Wires the auth workflow to PostgreSQL and the configured refresh-token backend.
pub async fn init_app_state(db: PgPool) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let store_config = RefreshStoreConfig::from_env();

    let credentials: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(db));
    let refresh_tokens = init_refresh_store(&store_config, &jwt_config).await?;

    Ok(build_state(credentials, refresh_tokens, jwt_config, store_config))
}

/// Everything in process memory; nothing survives a restart.
pub fn init_in_memory_state(jwt_config: JwtConfig) -> AppState {
    build_state(
        Arc::new(InMemoryCredentialStore::new()),
        Arc::new(InMemoryRefreshTokenStore::new()),
        jwt_config,
        RefreshStoreConfig::default(),
    )
}

pub async fn init_refresh_store(
    config: &RefreshStoreConfig,
    jwt_config: &JwtConfig,
) -> anyhow::Result<Arc<dyn RefreshTokenStore>> {
    match config.backend {
        RefreshStoreBackend::Memory => Ok(Arc::new(InMemoryRefreshTokenStore::new())),
        RefreshStoreBackend::Redis => {
            let ttl = entry_ttl(jwt_config.refresh_token_expiry);
            let store = RedisRefreshTokenStore::new(config, ttl).await?;
            Ok(Arc::new(store))
        }
    }
}

fn build_state(
    credentials: Arc<dyn CredentialStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    jwt_config: JwtConfig,
    store_config: RefreshStoreConfig,
) -> AppState {
    let auth = AuthService::new(
        credentials,
        Arc::new(BcryptHasher::default()),
        Arc::new(JwtTokenIssuer::new(jwt_config.clone())),
        refresh_tokens,
    );

    AppState {
        auth,
        jwt_config,
        store_config,
    }
}
