use thiserror::Error;

use crate::storage::StorageError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown, malformed or expired session id
    #[error("Session not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Header error: {0}")]
    HeaderError(String),
}

impl From<StorageError> for SessionError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<UtilError> for SessionError {
    fn from(err: UtilError) -> Self {
        Self::Crypto(err.to_string())
    }
}
