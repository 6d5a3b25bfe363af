//! HTTP Basic authorization header parsing
//!
//! Each step takes and returns `Option`, so a missing or unusable header simply yields `None`.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

const BASIC_PREFIX: &str = "Basic ";

/// Email and password carried by a Basic authorization header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The base64 part of a `Basic` authorization header
pub fn extract_base64_authorization_header(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix(BASIC_PREFIX)
}

/// Decode standard base64 into UTF-8 text
pub fn decode_base64_authorization_header(encoded: Option<&str>) -> Option<String> {
    let bytes = STANDARD.decode(encoded?).ok()?;
    String::from_utf8(bytes).ok()
}

/// Split `email:password` on the first colon; the password may itself contain colons
pub fn extract_user_credentials(decoded: Option<&str>) -> Option<BasicCredentials> {
    let (email, password) = decoded?.split_once(':')?;
    Some(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Full pipeline from the raw `Authorization` header value to credentials
pub fn parse_basic_authorization(header: Option<&str>) -> Option<BasicCredentials> {
    let encoded = extract_base64_authorization_header(header);
    let decoded = decode_base64_authorization_header(encoded);
    extract_user_credentials(decoded.as_deref())
}
