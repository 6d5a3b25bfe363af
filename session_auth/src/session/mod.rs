mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, SESSION_DURATION};
pub use errors::SessionError;
pub use main::{
    SessionManager, clear_session_cookie, session_id_from_headers, set_session_cookie,
};
pub use types::{Session, SessionConfig};
