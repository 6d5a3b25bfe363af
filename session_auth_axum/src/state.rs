use std::sync::Arc;

use session_auth::AuthService;

use crate::config::{AUTH_TYPE, AuthType, EXCLUDED_PATHS};

/// Router state shared by the handlers, the middleware and the [`AuthUser`](crate::AuthUser) extractor
#[derive(Clone, Debug)]
pub struct AuthState {
    pub(crate) auth: AuthService,
    pub(crate) auth_type: AuthType,
    excluded_paths: Arc<[String]>,
}

impl AuthState {
    /// State using `AUTH_TYPE` and `EXCLUDED_PATHS` from the environment
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            auth_type: *AUTH_TYPE,
            excluded_paths: EXCLUDED_PATHS.as_slice().into(),
        }
    }

    pub fn with_auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = auth_type;
        self
    }

    pub fn with_excluded_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn excluded_paths(&self) -> &[String] {
        &self.excluded_paths
    }
}
