//! session-auth - session lifecycle and credential handling for web applications
//!
//! This crate provides a session manager over pluggable storage (in-memory or SQL),
//! an email/password user store, bcrypt password hashing, HTTP Basic credential
//! parsing, PII log redaction, and an [`AuthService`] coordinating them.

mod coordination;
mod credentials;
mod redaction;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{AuthService, CoordinationError, require_auth};

pub use credentials::{
    BCRYPT_COST, BasicCredentials, PasswordError, decode_base64_authorization_header,
    extract_base64_authorization_header, extract_user_credentials, hash_password,
    hash_password_with_cost, parse_basic_authorization, verify_password,
};

pub use redaction::{PII_FIELDS, RedactingFormatter, filter_datum};

pub use session::{
    SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, SESSION_DURATION, Session, SessionConfig,
    SessionError, SessionManager, clear_session_cookie, session_id_from_headers, set_session_cookie,
};

pub use storage::{
    DB_TABLE_PREFIX, DB_TABLE_SESSIONS, DataStore, InMemorySessionStore, PostgresDataStore,
    SessionStore, SqlSessionStore, SqliteDataStore, StorageError, StoredSession,
    connect_data_store, session_store_from_env,
};

pub use userdb::{
    DB_TABLE_USERS, User, UserError, UserSearchField, UserStore, UserUpdate, user_store_from_env,
};

pub use utils::{UtilError, gen_random_string};
