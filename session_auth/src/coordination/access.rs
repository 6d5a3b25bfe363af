/// Whether a request to `path` needs authentication.
///
/// Paths are compared with a trailing slash, so `/api/v1/status` and `/api/v1/status/` are the
/// same path. An excluded entry ending in `*` matches every path starting with the part before
/// the `*`. A missing path or an empty exclusion list always requires authentication.
pub fn require_auth<S: AsRef<str>>(path: Option<&str>, excluded_paths: &[S]) -> bool {
    let Some(path) = path else {
        return true;
    };
    if excluded_paths.is_empty() {
        return true;
    }

    let path = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    };

    !excluded_paths.iter().any(|excluded| {
        let excluded = excluded.as_ref();
        match excluded.strip_suffix('*') {
            Some(prefix) => path.starts_with(prefix),
            None => path == excluded,
        }
    })
}
