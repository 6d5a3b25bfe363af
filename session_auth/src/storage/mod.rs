mod data_store;
mod errors;
mod schema_validation;
mod session_store;
mod types;

pub use data_store::{
    DB_TABLE_PREFIX, DataStore, PostgresDataStore, SqliteDataStore, connect_data_store,
};
pub use errors::StorageError;
pub use session_store::{
    DB_TABLE_SESSIONS, InMemorySessionStore, SessionStore, SqlSessionStore, session_store_from_env,
};
pub use types::StoredSession;

pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
