use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::data_store::DataStore;
use crate::storage::errors::StorageError;
use crate::storage::types::StoredSession;

/// Process-lifetime session store; contents are lost on restart.
pub struct InMemorySessionStore {
    pub(super) entries: Mutex<HashMap<String, StoredSession>>,
}

/// Durable session store backed by a `{prefix}sessions` table.
pub struct SqlSessionStore {
    pub(super) store: Arc<dyn DataStore>,
}

/// Storage capability set used by the session manager.
///
/// Every method is atomic with respect to other calls on the same key.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Prepare the backing storage. Safe to call more than once.
    async fn init(&self) -> Result<(), StorageError>;

    /// Store `session` unless its id is already present.
    /// Returns true if the session was stored, false if the id was taken.
    async fn put_if_absent(&self, session: StoredSession) -> Result<bool, StorageError>;

    /// Look up a session by id.
    async fn get(&self, session_id: &str) -> Result<Option<StoredSession>, StorageError>;

    /// Delete a session by id. Returns true if an entry was removed.
    async fn remove(&self, session_id: &str) -> Result<bool, StorageError>;
}
