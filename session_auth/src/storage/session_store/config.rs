use std::{env, sync::Arc, sync::LazyLock};

use crate::storage::data_store::{DB_TABLE_PREFIX, connect_data_store};
use crate::storage::errors::StorageError;

use super::types::{InMemorySessionStore, SessionStore, SqlSessionStore};

/// Sessions table name
pub static DB_TABLE_SESSIONS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_SESSIONS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "sessions"))
});

static SESSION_STORE_TYPE: LazyLock<String> =
    LazyLock::new(|| env::var("SESSION_STORE_TYPE").unwrap_or_else(|_| "memory".to_string()));

static SESSION_STORE_URL: LazyLock<Option<String>> =
    LazyLock::new(|| env::var("SESSION_STORE_URL").ok());

/// Build and initialize the session store selected by `SESSION_STORE_TYPE`
/// (`memory`, `sqlite` or `postgres`; default `memory`).
///
/// The SQL variants read their connection string from `SESSION_STORE_URL`.
pub async fn session_store_from_env() -> Result<Arc<dyn SessionStore>, StorageError> {
    let store = build_session_store(SESSION_STORE_TYPE.as_str(), SESSION_STORE_URL.as_deref())?;
    store.init().await?;
    Ok(store)
}

fn build_session_store(
    store_type: &str,
    store_url: Option<&str>,
) -> Result<Arc<dyn SessionStore>, StorageError> {
    tracing::info!("Initializing session store with type: {}", store_type);

    match store_type {
        "memory" => Ok(Arc::new(InMemorySessionStore::new())),
        "sqlite" | "postgres" => {
            let url = store_url.ok_or_else(|| {
                StorageError::Config(format!(
                    "SESSION_STORE_URL must be set for session store type '{store_type}'"
                ))
            })?;
            let data_store = connect_data_store(url)?;
            Ok(Arc::new(SqlSessionStore::new(data_store)))
        }
        t => Err(StorageError::Config(format!(
            "Unsupported session store type: {t}. Supported types are 'memory', 'sqlite' and 'postgres'"
        ))),
    }
}
