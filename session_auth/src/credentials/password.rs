use super::config::BCRYPT_COST;
use super::errors::PasswordError;

/// Hash `password` with bcrypt at the configured cost.
///
/// Each call uses a fresh salt, so hashing the same password twice gives different output.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash_password_with_cost(password, *BCRYPT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check `password` against a stored bcrypt hash.
///
/// A malformed stored hash never matches.
pub fn verify_password(hashed_password: &str, password: &str) -> bool {
    match bcrypt::verify(password, hashed_password) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            false
        }
    }
}
