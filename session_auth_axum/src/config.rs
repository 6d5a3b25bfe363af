//! Environment configuration for the axum integration

use std::sync::LazyLock;

/// How the `require_auth` middleware identifies the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthType {
    /// Session id in the session cookie
    #[default]
    Session,
    /// `Authorization: Basic ...` on every request
    Basic,
}

/// Selected by `AUTH_TYPE` (`session_auth` or `basic_auth`)
pub static AUTH_TYPE: LazyLock<AuthType> =
    LazyLock::new(|| parse_auth_type(std::env::var("AUTH_TYPE").ok().as_deref()));

/// Paths that skip authentication, from the comma separated `EXCLUDED_PATHS`
pub static EXCLUDED_PATHS: LazyLock<Vec<String>> =
    LazyLock::new(|| parse_excluded_paths(std::env::var("EXCLUDED_PATHS").ok().as_deref()));

const DEFAULT_EXCLUDED_PATHS: &str = "/status/,/auth_session/login/,/users/";

fn parse_auth_type(value: Option<&str>) -> AuthType {
    match value.map(str::trim) {
        None | Some("") | Some("session_auth") => AuthType::Session,
        Some("basic_auth") => AuthType::Basic,
        Some(other) => {
            tracing::warn!("Unknown AUTH_TYPE '{}', using session_auth", other);
            AuthType::Session
        }
    }
}

fn parse_excluded_paths(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or(DEFAULT_EXCLUDED_PATHS)
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_type() {
        assert_eq!(parse_auth_type(None), AuthType::Session);
        assert_eq!(parse_auth_type(Some("session_auth")), AuthType::Session);
        assert_eq!(parse_auth_type(Some("basic_auth")), AuthType::Basic);
        assert_eq!(parse_auth_type(Some(" basic_auth ")), AuthType::Basic);
        assert_eq!(parse_auth_type(Some("oauth")), AuthType::Session);
    }

    #[test]
    fn test_parse_excluded_paths_default() {
        assert_eq!(
            parse_excluded_paths(None),
            vec!["/status/", "/auth_session/login/", "/users/"]
        );
    }

    #[test]
    fn test_parse_excluded_paths_custom() {
        assert_eq!(
            parse_excluded_paths(Some(" /a/ , /b/*,,")),
            vec!["/a/", "/b/*"]
        );
        assert!(parse_excluded_paths(Some("")).is_empty());
    }
}
