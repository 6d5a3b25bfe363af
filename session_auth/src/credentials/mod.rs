mod basic;
mod config;
mod errors;
mod password;

pub use basic::{
    BasicCredentials, decode_base64_authorization_header, extract_base64_authorization_header,
    extract_user_credentials, parse_basic_authorization,
};
pub use config::BCRYPT_COST;
pub use errors::PasswordError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
