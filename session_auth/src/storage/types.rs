use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session row as held by a [`SessionStore`](super::SessionStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StoredSession {
    pub session_id: String,
    pub principal_id: String,
    pub created_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(session_id: String, principal_id: String) -> Self {
        Self {
            session_id,
            principal_id,
            created_at: Utc::now(),
        }
    }
}
