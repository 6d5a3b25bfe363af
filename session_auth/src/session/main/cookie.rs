use http::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};

use crate::session::config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::SessionConfig;

/// Find the session cookie in the request headers
///
/// Returns `Ok(None)` when there is no cookie header or no session cookie in it.
pub fn session_id_from_headers(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    let cookie_name = SESSION_COOKIE_NAME.as_str();

    for cookie_header in headers.get_all(COOKIE) {
        let cookie_str = cookie_header.to_str().map_err(|e| {
            tracing::error!("Invalid cookie header: {}", e);
            SessionError::HeaderError("Invalid cookie header".to_string())
        })?;

        let session_id = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
            let mut parts = s.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(k), Some(v)) if k == cookie_name => Some(v),
                _ => None,
            }
        });

        if session_id.is_some() {
            return Ok(session_id);
        }
    }

    tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    Ok(None)
}

/// Append a `Set-Cookie` header carrying `session_id`
///
/// The cookie gets a `Max-Age` matching the configured expiry, and is a browser-session
/// cookie when sessions never expire. `Secure` follows `SESSION_COOKIE_SECURE`.
pub fn set_session_cookie(
    headers: &mut HeaderMap,
    session_id: &str,
    config: &SessionConfig,
) -> Result<(), SessionError> {
    let max_age = config.effective_expiry().map(|d| d.num_seconds());
    append_cookie(headers, session_id, max_age)
}

/// Append a `Set-Cookie` header that removes the session cookie
pub fn clear_session_cookie(headers: &mut HeaderMap) -> Result<(), SessionError> {
    append_cookie(headers, "", Some(0))
}

fn append_cookie(
    headers: &mut HeaderMap,
    value: &str,
    max_age: Option<i64>,
) -> Result<(), SessionError> {
    let cookie = cookie_string(
        SESSION_COOKIE_NAME.as_str(),
        value,
        max_age,
        *SESSION_COOKIE_SECURE,
    );

    let header_value = HeaderValue::from_str(&cookie)
        .map_err(|_| SessionError::HeaderError("Failed to build cookie header".to_string()))?;
    headers.append(SET_COOKIE, header_value);
    Ok(())
}

fn cookie_string(name: &str, value: &str, max_age: Option<i64>, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; SameSite=Lax; HttpOnly; Path=/");
    if secure {
        cookie.push_str("; Secure");
    }
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_name() -> &'static str {
        SESSION_COOKIE_NAME.as_str()
    }

    #[test]
    fn test_session_id_from_headers_found() {
        // Given a cookie header with several cookies including the session cookie
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}=abc123; lang=en", cookie_name()))
                .unwrap(),
        );

        // Then the session id is extracted
        let id = session_id_from_headers(&headers).unwrap();
        assert_eq!(id, Some("abc123"));
    }

    #[test]
    fn test_session_id_from_headers_missing() {
        let headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers).unwrap(), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_id_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_session_id_from_second_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            COOKIE,
            HeaderValue::from_str(&format!("{}=xyz", cookie_name())).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers).unwrap(), Some("xyz"));
    }

    #[test]
    fn test_session_id_from_headers_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(b"name=\xff").unwrap());
        assert!(matches!(
            session_id_from_headers(&headers),
            Err(SessionError::HeaderError(_))
        ));
    }

    #[test]
    fn test_cookie_string_secure_flag() {
        let secure = cookie_string("sid", "abc", Some(60), true);
        assert_eq!(
            secure,
            "sid=abc; SameSite=Lax; HttpOnly; Path=/; Secure; Max-Age=60"
        );

        let plain = cookie_string("sid", "abc", None, false);
        assert_eq!(plain, "sid=abc; SameSite=Lax; HttpOnly; Path=/");
        assert!(!plain.contains("Secure"));
    }

    #[test]
    fn test_set_session_cookie_with_expiry() {
        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, "abc", &SessionConfig::from_seconds(60)).unwrap();

        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.starts_with(&format!("{}=abc;", cookie_name())));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Max-Age=60"));
    }

    #[test]
    fn test_set_session_cookie_without_expiry() {
        let mut headers = HeaderMap::new();
        set_session_cookie(&mut headers, "abc", &SessionConfig::new()).unwrap();

        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(!value.contains("Max-Age"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let mut headers = HeaderMap::new();
        clear_session_cookie(&mut headers).unwrap();

        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.starts_with(&format!("{}=;", cookie_name())));
        assert!(value.contains("Max-Age=0"));
    }
}
