use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::session::config::SESSION_DURATION;
use crate::storage::StoredSession;

/// Session manager configuration
///
/// `expiry` of `None`, zero or negative disables expiration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub expiry: Option<Duration>,
}

impl SessionConfig {
    /// Sessions never expire
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiry(expiry: Duration) -> Self {
        Self {
            expiry: Some(expiry),
        }
    }

    /// Expire after `seconds`; non-positive or out of range values never expire
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            expiry: Some(seconds)
                .filter(|s| *s > 0)
                .and_then(Duration::try_seconds),
        }
    }

    /// Build from the `SESSION_DURATION` environment variable
    pub fn from_env() -> Self {
        Self::from_seconds(*SESSION_DURATION)
    }

    /// The expiry actually enforced
    pub fn effective_expiry(&self) -> Option<Duration> {
        self.expiry.filter(|d| *d > Duration::zero())
    }

    pub(crate) fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.effective_expiry() {
            Some(expiry) => now - created_at > expiry,
            None => false,
        }
    }
}

/// A live session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub principal_id: String,
    pub created_at: DateTime<Utc>,
    /// `None` when sessions do not expire
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub(crate) fn from_stored(stored: StoredSession, config: &SessionConfig) -> Self {
        // Past the last representable instant the session simply has no end
        let expires_at = config
            .effective_expiry()
            .and_then(|expiry| stored.created_at.checked_add_signed(expiry));
        Self {
            id: stored.session_id,
            principal_id: stored.principal_id,
            created_at: stored.created_at,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds() {
        assert_eq!(SessionConfig::from_seconds(0).expiry, None);
        assert_eq!(SessionConfig::from_seconds(-10).expiry, None);
        assert_eq!(
            SessionConfig::from_seconds(60).expiry,
            Some(Duration::seconds(60))
        );
    }

    #[test]
    fn test_from_seconds_out_of_range_never_expires() {
        assert_eq!(SessionConfig::from_seconds(i64::MAX).expiry, None);
        assert_eq!(SessionConfig::from_seconds(i64::MAX).effective_expiry(), None);
    }

    #[test]
    fn test_effective_expiry_ignores_non_positive() {
        let config = SessionConfig::with_expiry(Duration::zero());
        assert_eq!(config.effective_expiry(), None);

        let config = SessionConfig::with_expiry(Duration::seconds(-1));
        assert_eq!(config.effective_expiry(), None);
    }

    #[test]
    fn test_is_expired_boundaries() {
        // Given a 60 second expiry and a session created at t0
        let config = SessionConfig::from_seconds(60);
        let t0 = Utc::now();

        // Then it is live just before t0 + d and at exactly t0 + d
        assert!(!config.is_expired(t0, t0 + Duration::seconds(59)));
        assert!(!config.is_expired(t0, t0 + Duration::seconds(60)));

        // And expired just after t0 + d
        assert!(config.is_expired(t0, t0 + Duration::milliseconds(60_001)));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let config = SessionConfig::new();
        let t0 = Utc::now();
        assert!(!config.is_expired(t0, t0 + Duration::days(365 * 100)));
    }

    #[test]
    fn test_session_from_stored_sets_expires_at() {
        let stored = StoredSession::new("sid".to_string(), "alice".to_string());
        let created_at = stored.created_at;

        let session = Session::from_stored(stored.clone(), &SessionConfig::from_seconds(30));
        assert_eq!(session.expires_at, Some(created_at + Duration::seconds(30)));

        let session = Session::from_stored(stored, &SessionConfig::new());
        assert_eq!(session.expires_at, None);
    }

    #[test]
    fn test_session_from_stored_expiry_past_max_date() {
        // Given an expiry that lands beyond the last representable date
        let stored = StoredSession::new("sid".to_string(), "alice".to_string());
        let config = SessionConfig::from_seconds(10_i64.pow(15));
        assert!(config.effective_expiry().is_some());

        // Then the record has no end instead of overflowing
        let session = Session::from_stored(stored.clone(), &config);
        assert_eq!(session.expires_at, None);
        assert!(!config.is_expired(stored.created_at, Utc::now()));
    }
}
