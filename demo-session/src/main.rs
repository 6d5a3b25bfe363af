use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use session_auth::{
    AuthService, SessionConfig, SessionManager, session_store_from_env, user_store_from_env,
};
use session_auth_axum::{AuthState, AuthUser, session_auth_router};

mod redact;
mod server;

use crate::server::{PORT, init_tracing, spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_session");

    let sessions = SessionManager::new(SessionConfig::from_env(), session_store_from_env().await?);
    let users = user_store_from_env().await?;
    let state = AuthState::new(AuthService::new(sessions, users));
    tracing::info!(
        auth_type = ?state.auth_type(),
        excluded_paths = ?state.excluded_paths(),
        "Authentication configured"
    );

    let app = Router::new()
        .route("/", get(index))
        .route("/protected", get(protected))
        .with_state(state.clone())
        .merge(session_auth_router(state));

    spawn_http_server(*PORT, app).await??;
    Ok(())
}

async fn index(user: Option<AuthUser>) -> Json<Value> {
    match user {
        Some(user) => Json(json!({ "message": format!("Hello, {}", user.email) })),
        None => Json(json!({ "message": "Bienvenue" })),
    }
}

async fn protected(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}
