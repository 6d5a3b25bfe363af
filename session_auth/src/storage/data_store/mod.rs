mod config;
mod types;

pub use config::{DB_TABLE_PREFIX, connect_data_store};
pub use types::{DataStore, PostgresDataStore, SqliteDataStore};
