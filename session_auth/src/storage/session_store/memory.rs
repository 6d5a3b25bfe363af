use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::Mutex;

use crate::storage::errors::StorageError;
use crate::storage::types::StoredSession;

use super::types::{InMemorySessionStore, SessionStore};

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn put_if_absent(&self, session: StoredSession) -> Result<bool, StorageError> {
        let mut entries = self.entries.lock().await;
        match entries.entry(session.session_id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(session);
                Ok(true)
            }
        }
    }

    async fn get(&self, session_id: &str) -> Result<Option<StoredSession>, StorageError> {
        Ok(self.entries.lock().await.get(session_id).cloned())
    }

    async fn remove(&self, session_id: &str) -> Result<bool, StorageError> {
        Ok(self.entries.lock().await.remove(session_id).is_some())
    }
}
