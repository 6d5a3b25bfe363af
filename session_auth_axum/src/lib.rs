//! session-auth-axum - Axum integration for session-auth
//!
//! Provides the router state, the [`AuthUser`] extractor, the [`require_auth`] middleware
//! and a router with login, logout, registration and current user endpoints.
//!
//! ```no_run
//! use std::sync::Arc;
//! use session_auth::{AuthService, InMemorySessionStore, SessionConfig, SessionManager, UserStore};
//! use session_auth_axum::{AuthState, session_auth_router};
//!
//! # async fn app() -> Result<axum::Router, Box<dyn std::error::Error>> {
//! let sessions = SessionManager::new(SessionConfig::from_env(), Arc::new(InMemorySessionStore::new()));
//! let users = UserStore::new(session_auth::connect_data_store("sqlite::memory:")?);
//! users.init().await?;
//!
//! let state = AuthState::new(AuthService::new(sessions, users));
//! Ok(session_auth_router(state))
//! # }
//! ```

mod auth_session;
mod config;
mod error;
mod middleware;
mod router;
mod session;
mod state;
mod users;

#[cfg(test)]
mod test_utils;

pub use config::{AUTH_TYPE, AuthType, EXCLUDED_PATHS};
pub use error::{ApiError, IntoResponseError};
pub use middleware::require_auth;
pub use router::{session_auth_router, session_auth_router_no_trace};
pub use session::{AuthRejection, AuthUser};
pub use state::AuthState;

pub use session_auth::{AuthService, SESSION_COOKIE_NAME};
