use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

impl From<bcrypt::BcryptError> for PasswordError {
    fn from(err: bcrypt::BcryptError) -> Self {
        PasswordError::Hash(err.to_string())
    }
}
