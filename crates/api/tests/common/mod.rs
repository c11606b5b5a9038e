use std::sync::Arc;

use axum::Router;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use sigcolle_api::config::ServerConfig;
use sigcolle_api::router::build_app_router;
use sigcolle_api::state::AppState;
use sigcolle_core::types::DbId;
use sigcolle_db::models::session::CreateSession;
use sigcolle_db::models::user::CreateUser;
use sigcolle_db::repositories::{SessionRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        markdown_rendering: true,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] but with an explicit configuration, for
/// tests that flip the Markdown rendering flag.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user with an active session and return `(user_id, session token)`.
pub async fn seed_user_session(pool: &PgPool) -> (DbId, Uuid) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            last_name: "Yamada".to_string(),
            first_name: "Taro".to_string(),
            email: format!("user-{}@example.com", Uuid::new_v4()),
        },
    )
    .await
    .expect("seed user");

    let token = Uuid::new_v4();
    SessionRepo::create(
        pool,
        &CreateSession {
            token,
            user_id: user.id,
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .expect("seed session");

    (user.id, token)
}
