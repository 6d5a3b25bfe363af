//! Router for the authentication endpoints

use axum::{
    Json, Router, middleware,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::auth_session::{login, logout};
use crate::middleware::require_auth;
use crate::state::AuthState;
use crate::users::{me, register};

/// Routes for login, logout, registration, the current user and a status probe,
/// guarded by [`require_auth`] and traced per request.
pub fn session_auth_router(state: AuthState) -> Router {
    session_auth_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

pub fn session_auth_router_no_trace(state: AuthState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/auth_session/login", post(login))
        .route("/auth_session/logout", delete(logout))
        .route("/users", post(register))
        .route("/users/me", get(me))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
