//! Shared helpers for tests across the crate
//!
//! Every helper builds its own stores, so tests do not share state and need no
//! `#[serial]` unless they touch environment variables.

use chrono::{Duration, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

use crate::coordination::AuthService;
use crate::session::{SessionConfig, SessionManager};
use crate::storage::{
    DataStore, InMemorySessionStore, SessionStore, SqlSessionStore, SqliteDataStore, StoredSession,
};
use crate::userdb::UserStore;
use crate::utils::gen_random_string;

/// Lowest cost bcrypt accepts, keeps hashing fast in tests
pub(crate) const TEST_BCRYPT_COST: u32 = 4;

/// A private in-memory SQLite database on a single connection
pub(crate) async fn sqlite_memory_data_store() -> Arc<dyn DataStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");
    Arc::new(SqliteDataStore::new(pool))
}

pub(crate) fn memory_manager(config: SessionConfig) -> SessionManager {
    SessionManager::new(config, Arc::new(InMemorySessionStore::new()))
}

pub(crate) async fn sql_manager(config: SessionConfig) -> SessionManager {
    let store = SqlSessionStore::new(sqlite_memory_data_store().await);
    store
        .init()
        .await
        .expect("Failed to initialize session table");
    SessionManager::new(config, Arc::new(store))
}

/// One initialized store per backend, labelled for assertion messages
pub(crate) async fn session_stores() -> Vec<(&'static str, Arc<dyn SessionStore>)> {
    let sql = SqlSessionStore::new(sqlite_memory_data_store().await);
    sql.init()
        .await
        .expect("Failed to initialize session table");
    vec![
        ("memory", Arc::new(InMemorySessionStore::new())),
        ("sqlite", Arc::new(sql)),
    ]
}

/// Insert a session for `principal` that was created `age` ago and return its id
pub(crate) async fn backdated_session(
    store: &dyn SessionStore,
    principal: &str,
    age: Duration,
) -> String {
    let session_id = gen_random_string(16).expect("Failed to generate session id");
    let inserted = store
        .put_if_absent(StoredSession {
            session_id: session_id.clone(),
            principal_id: principal.to_string(),
            created_at: Utc::now() - age,
        })
        .await
        .expect("Failed to insert backdated session");
    assert!(inserted, "backdated session id collided");
    session_id
}

pub(crate) async fn user_store() -> UserStore {
    let store = UserStore::new(sqlite_memory_data_store().await);
    store.init().await.expect("Failed to initialize UserStore");
    store
}

/// An auth service over in-memory sessions and a fresh user database
pub(crate) async fn auth_service() -> AuthService {
    AuthService::new(memory_manager(SessionConfig::new()), user_store().await)
        .with_password_cost(TEST_BCRYPT_COST)
}
