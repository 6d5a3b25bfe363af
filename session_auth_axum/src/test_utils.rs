//! Shared helpers for router and extractor tests

use axum::{body::Body, response::Response};
use http::{Request, header};
use serde_json::Value;
use std::sync::Arc;

use session_auth::{
    AuthService, InMemorySessionStore, SESSION_COOKIE_NAME, SessionConfig, SessionManager,
    UserStore, connect_data_store,
};

use crate::config::AuthType;
use crate::state::AuthState;

/// State over fresh in-memory stores with the default exclusions
pub(crate) async fn test_state(auth_type: AuthType) -> AuthState {
    let sessions = SessionManager::new(
        SessionConfig::from_seconds(3600),
        Arc::new(InMemorySessionStore::new()),
    );
    let users = UserStore::new(
        connect_data_store("sqlite::memory:").expect("Failed to open in-memory SQLite database"),
    );
    users.init().await.expect("Failed to initialize UserStore");

    AuthState::new(AuthService::new(sessions, users).with_password_cost(4))
        .with_auth_type(auth_type)
        .with_excluded_paths(["/status/", "/auth_session/login/", "/users/"])
}

pub(crate) fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) fn request_with_cookie(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `name=value` of the session cookie set by `response`
pub(crate) fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{}=", SESSION_COOKIE_NAME.as_str())))
        .map(String::from)
}

pub(crate) async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
