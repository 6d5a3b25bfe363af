mod config;
mod memory;
mod postgres;
mod sql;
mod sqlite;
mod types;

pub use config::{DB_TABLE_SESSIONS, session_store_from_env};
pub use types::{InMemorySessionStore, SessionStore, SqlSessionStore};
