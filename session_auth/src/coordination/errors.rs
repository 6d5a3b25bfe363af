//! Error types for auth coordination

use thiserror::Error;

use crate::credentials::PasswordError;
use crate::session::SessionError;
use crate::userdb::UserError;

/// Errors that can occur during authentication coordination
#[derive(Error, Debug)]
pub enum CoordinationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No user is registered under the given email
    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// Credentials were presented but could not be used
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("User error: {0}")]
    User(#[from] UserError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::InvalidArgument(msg) => tracing::debug!("Invalid argument: {}", msg),
            Self::UserNotFound | Self::WrongPassword | Self::Unauthorized => {
                tracing::debug!("Authentication rejected: {}", self)
            }
            Self::AlreadyExists(_) => tracing::debug!("Registration rejected: {}", self),
            Self::Session(SessionError::NotFound) => tracing::debug!("{}", self),
            Self::Session(err) => tracing::error!("Session error: {}", err),
            Self::User(err) => tracing::error!("User error: {}", err),
            Self::Password(err) => tracing::error!("Password error: {}", err),
        }
        self
    }

    /// True for failures of the backing stores rather than of the caller's input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::Storage(_) | SessionError::Crypto(_))
                | Self::User(UserError::Storage(_))
                | Self::Password(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<CoordinationError>();
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CoordinationError::UserNotFound.to_string(), "User not found");
        assert_eq!(CoordinationError::WrongPassword.to_string(), "Wrong password");
        assert_eq!(
            CoordinationError::InvalidArgument("email missing".to_string()).to_string(),
            "Invalid argument: email missing"
        );
        assert_eq!(
            CoordinationError::Session(SessionError::NotFound).to_string(),
            "Session error: Session not found"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: CoordinationError = SessionError::NotFound.into();
        assert!(matches!(err, CoordinationError::Session(SessionError::NotFound)));

        let err: CoordinationError = UserError::NotFound.into();
        assert!(matches!(err, CoordinationError::User(UserError::NotFound)));

        let err: CoordinationError = PasswordError::Hash("bad cost".to_string()).into();
        assert!(matches!(err, CoordinationError::Password(_)));
    }

    #[test]
    fn test_is_internal() {
        assert!(CoordinationError::User(UserError::Storage("down".to_string())).is_internal());
        assert!(CoordinationError::Session(SessionError::Storage("down".to_string())).is_internal());
        assert!(!CoordinationError::Session(SessionError::NotFound).is_internal());
        assert!(!CoordinationError::WrongPassword.is_internal());
        assert!(!CoordinationError::Unauthorized.is_internal());
    }

    #[test]
    fn test_log_returns_self() {
        let err = CoordinationError::UserNotFound.log();
        assert!(matches!(err, CoordinationError::UserNotFound));
    }
}
