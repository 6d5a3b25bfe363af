use chrono::Utc;
use std::sync::Arc;

use crate::session::errors::SessionError;
use crate::session::types::{Session, SessionConfig};
use crate::storage::{SessionStore, StoredSession};
use crate::utils::{base64url_decode, gen_random_string};

/// Random bytes per session id (128 bits)
const SESSION_ID_BYTES: usize = 16;

/// Length of a base64url-encoded session id
const SESSION_ID_LEN: usize = 22;

/// Fresh ids drawn before giving up on a colliding insert
const MAX_ID_ATTEMPTS: usize = 8;

/// Issues, resolves and revokes session ids over a pluggable [`SessionStore`].
///
/// The manager is cheap to clone; clones share the same store.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use session_auth::{InMemorySessionStore, SessionConfig, SessionManager};
///
/// # async fn demo() -> Result<(), session_auth::SessionError> {
/// let manager = SessionManager::new(
///     SessionConfig::from_seconds(3600),
///     Arc::new(InMemorySessionStore::new()),
/// );
/// let session_id = manager.create_session("alice@example.com").await?;
/// assert_eq!(manager.resolve_session(session_id.as_str()).await?, "alice@example.com");
/// manager.destroy_session(session_id.as_str()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionManager {
    config: SessionConfig,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(config: SessionConfig, store: Arc<dyn SessionStore>) -> Self {
        tracing::info!(
            expiry_secs = config.effective_expiry().map(|d| d.num_seconds()),
            "Creating session manager"
        );
        Self { config, store }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Create a session for `principal_id` and return its id.
    ///
    /// # Errors
    /// * `InvalidArgument` if the principal id is absent or blank
    /// * `Storage` if the store fails, or no unused id could be drawn
    pub async fn create_session<'a>(
        &self,
        principal_id: impl Into<Option<&'a str>>,
    ) -> Result<String, SessionError> {
        let principal_id = principal_id
            .into()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                SessionError::InvalidArgument("principal id must not be empty".to_string())
            })?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let session_id = gen_random_string(SESSION_ID_BYTES)?;
            let stored = StoredSession::new(session_id.clone(), principal_id.to_string());

            if self.store.put_if_absent(stored).await? {
                tracing::debug!(
                    session = %redact_id(&session_id),
                    "Session created"
                );
                return Ok(session_id);
            }

            tracing::warn!("Session id collision, drawing a new id");
        }

        Err(SessionError::Storage(
            "Could not allocate a unique session id".to_string(),
        ))
    }

    /// Return the principal bound to `session_id`.
    ///
    /// Absent, malformed, unknown and expired ids all yield `NotFound`.
    pub async fn resolve_session<'a>(
        &self,
        session_id: impl Into<Option<&'a str>>,
    ) -> Result<String, SessionError> {
        self.session(session_id).await.map(|s| s.principal_id)
    }

    /// Like [`resolve_session`](Self::resolve_session), returning the whole session record.
    pub async fn session<'a>(
        &self,
        session_id: impl Into<Option<&'a str>>,
    ) -> Result<Session, SessionError> {
        let session_id = well_formed(session_id.into()).ok_or(SessionError::NotFound)?;
        let stored = self.live_entry(session_id).await?;
        Ok(Session::from_stored(stored, &self.config))
    }

    /// Remove the session `session_id`.
    ///
    /// Returns `NotFound` when there was nothing live to remove. An expired entry is
    /// still deleted but reported like one that never existed.
    pub async fn destroy_session<'a>(
        &self,
        session_id: impl Into<Option<&'a str>>,
    ) -> Result<(), SessionError> {
        let session_id = well_formed(session_id.into()).ok_or(SessionError::NotFound)?;
        self.live_entry(session_id).await?;

        if self.store.remove(session_id).await? {
            tracing::debug!(session = %redact_id(session_id), "Session destroyed");
            Ok(())
        } else {
            Err(SessionError::NotFound)
        }
    }

    /// The stored entry for `session_id` if it has not expired.
    ///
    /// Expired entries are removed on read so they do not accumulate.
    async fn live_entry(&self, session_id: &str) -> Result<StoredSession, SessionError> {
        let stored = self
            .store
            .get(session_id)
            .await?
            .ok_or(SessionError::NotFound)?;

        if self.config.is_expired(stored.created_at, Utc::now()) {
            tracing::debug!(session = %redact_id(session_id), "Session expired");
            if let Err(e) = self.store.remove(session_id).await {
                tracing::warn!(error = %e, "Failed to remove expired session");
            }
            return Err(SessionError::NotFound);
        }

        Ok(stored)
    }
}

/// Accept only ids shaped like the ones this manager issues.
fn well_formed(session_id: Option<&str>) -> Option<&str> {
    let id = session_id?;
    if id.len() != SESSION_ID_LEN {
        return None;
    }
    match base64url_decode(id) {
        Ok(bytes) if bytes.len() == SESSION_ID_BYTES => Some(id),
        _ => None,
    }
}

/// First characters of an id, safe for logs
fn redact_id(session_id: &str) -> String {
    let prefix: String = session_id.chars().take(6).collect();
    format!("{prefix}…")
}
