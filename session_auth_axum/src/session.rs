use axum::{
    Json,
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts};
use serde::Serialize;
use serde_json::json;

use session_auth::{User, session_id_from_headers};

use crate::config::AuthType;
use crate::error::coordination_status;
use crate::state::AuthState;

/// Why a request could not be tied to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No credential was presented
    Unauthorized,
    /// A credential was presented but does not identify a user
    Forbidden,
    /// The stores failed while checking the credential
    Internal,
}

impl AuthRejection {
    pub fn status(self) -> StatusCode {
        match self {
            AuthRejection::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthRejection::Forbidden => StatusCode::FORBIDDEN,
            AuthRejection::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AuthRejection::Unauthorized => "Unauthorized",
            AuthRejection::Forbidden => "Forbidden",
            AuthRejection::Internal => "internal error",
        };
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

/// The authenticated user of a request
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        AuthUser {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Resolve the caller from the request headers according to the configured auth type
pub(crate) async fn authenticate(
    state: &AuthState,
    headers: &HeaderMap,
) -> Result<AuthUser, AuthRejection> {
    let result = match state.auth_type {
        AuthType::Session => {
            let session_id = session_id_from_headers(headers).map_err(|e| {
                tracing::debug!("Unreadable session cookie: {}", e);
                AuthRejection::Forbidden
            })?;
            let Some(session_id) = session_id else {
                tracing::debug!("No session cookie");
                return Err(AuthRejection::Unauthorized);
            };
            state.auth.current_user(session_id).await
        }
        AuthType::Basic => {
            let Some(header) = headers.get(AUTHORIZATION) else {
                tracing::debug!("No Authorization header");
                return Err(AuthRejection::Unauthorized);
            };
            let header = header.to_str().map_err(|_| AuthRejection::Forbidden)?;
            state.auth.current_user_from_basic(header).await
        }
    };

    match result {
        Ok(user) => Ok(AuthUser::from(user)),
        Err(e) => {
            let e = e.log();
            if coordination_status(&e) == StatusCode::INTERNAL_SERVER_ERROR {
                Err(AuthRejection::Internal)
            } else {
                Err(AuthRejection::Forbidden)
            }
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already resolved by the middleware
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let state = AuthState::from_ref(state);
        let user = authenticate(&state, &parts.headers).await?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthRejection::Internal) => Err(AuthRejection::Internal),
            Err(_) => Ok(None),
        }
    }
}
