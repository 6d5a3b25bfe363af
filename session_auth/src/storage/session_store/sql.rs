use async_trait::async_trait;
use std::sync::Arc;

use crate::storage::data_store::DataStore;
use crate::storage::errors::StorageError;
use crate::storage::types::StoredSession;

use super::postgres::*;
use super::sqlite::*;
use super::types::{SessionStore, SqlSessionStore};

impl SqlSessionStore {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        tracing::info!("Creating new SQL session store");
        Self { store }
    }

    fn unsupported() -> StorageError {
        StorageError::Storage("Unsupported database type".to_string())
    }
}

#[async_trait]
impl SessionStore for SqlSessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => {
                create_session_table_sqlite(pool).await?;
                validate_session_table_sqlite(pool).await
            }
            (_, Some(pool)) => {
                create_session_table_postgres(pool).await?;
                validate_session_table_postgres(pool).await
            }
            _ => Err(Self::unsupported()),
        }
    }

    async fn put_if_absent(&self, session: StoredSession) -> Result<bool, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            insert_session_sqlite(pool, &session).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_session_postgres(pool, &session).await
        } else {
            Err(Self::unsupported())
        }
    }

    async fn get(&self, session_id: &str) -> Result<Option<StoredSession>, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            get_session_sqlite(pool, session_id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_session_postgres(pool, session_id).await
        } else {
            Err(Self::unsupported())
        }
    }

    async fn remove(&self, session_id: &str) -> Result<bool, StorageError> {
        if let Some(pool) = self.store.as_sqlite() {
            delete_session_sqlite(pool, session_id).await
        } else if let Some(pool) = self.store.as_postgres() {
            delete_session_postgres(pool, session_id).await
        } else {
            Err(Self::unsupported())
        }
    }
}
