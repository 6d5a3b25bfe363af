use std::sync::LazyLock;

/// Name of the cookie carrying the session id
pub static SESSION_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| parse_session_cookie_name(std::env::var("SESSION_NAME").ok().as_deref()));

/// Whether the session cookie carries `Secure`, from `SESSION_COOKIE_SECURE` (default true)
pub static SESSION_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    parse_session_cookie_secure(std::env::var("SESSION_COOKIE_SECURE").ok().as_deref())
});

/// Session lifetime in seconds; zero, negative or unparsable means sessions never expire
pub static SESSION_DURATION: LazyLock<i64> =
    LazyLock::new(|| parse_session_duration(std::env::var("SESSION_DURATION").ok().as_deref()));

pub(super) fn parse_session_duration(value: Option<&str>) -> i64 {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

fn parse_session_cookie_name(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("_my_session_id")
        .to_string()
}

fn parse_session_cookie_secure(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("false") | Some("0") | Some("no") => false,
        None | Some("") | Some("true") | Some("1") | Some("yes") => true,
        Some(other) => {
            tracing::warn!("Invalid SESSION_COOKIE_SECURE '{}', keeping Secure", other);
            true
        }
    }
}
