mod common;

use std::sync::Arc;

use authgate::authgate_auth::verify_access_token;
use authgate::authgate_core::AuthError;
use common::{get_test_jwt_config, setup_pg_service};
use sqlx::PgPool;

#[sqlx::test(migrations = "crates/authgate-db/migrations")]
async fn test_register_login_refresh_over_postgres(pool: PgPool) {
    let config = get_test_jwt_config();
    let service = setup_pg_service(pool.clone(), config.clone());

    service.register("a@x.com", "alice", "pw1").await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind("a@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "pw1");

    let tokens = service.login("a@x.com", "pw1").await.unwrap();
    let access = service
        .refresh_access_token("a@x.com", &tokens.refresh_token)
        .await
        .unwrap();
    assert_eq!(verify_access_token(&access, &config).unwrap().sub, "a@x.com");
}

#[sqlx::test(migrations = "crates/authgate-db/migrations")]
async fn test_register_duplicate_over_postgres(pool: PgPool) {
    let service = setup_pg_service(pool, get_test_jwt_config());

    service.register("a@x.com", "alice", "pw1").await.unwrap();

    let result = service.register("a@x.com", "mallory", "pw2").await;
    assert!(matches!(result, Err(AuthError::DuplicateIdentity)));
    assert!(matches!(
        service.login("a@x.com", "pw2").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[sqlx::test(migrations = "crates/authgate-db/migrations")]
async fn test_concurrent_register_over_postgres(pool: PgPool) {
    let service = Arc::new(setup_pg_service(pool.clone(), get_test_jwt_config()));

    let handles: Vec<_> = ["alice", "mallory"]
        .into_iter()
        .map(|username| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.register("a@x.com", username, "pw1").await })
        })
        .collect();

    let mut registered = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => registered += 1,
            Err(e) => assert!(matches!(e, AuthError::DuplicateIdentity)),
        }
    }
    assert_eq!(registered, 1);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("a@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
