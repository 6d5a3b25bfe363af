//! Session login and logout endpoints

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde_json::json;

use session_auth::{
    CoordinationError, SessionError, clear_session_cookie, session_id_from_headers,
    set_session_cookie,
};

use crate::error::{ApiError, IntoResponseError};
use crate::state::AuthState;

/// `email` and `password` form fields
#[derive(Deserialize)]
pub(crate) struct CredentialsForm {
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
}

/// `POST /auth_session/login`
pub(crate) async fn login(
    State(state): State<AuthState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, ApiError> {
    let (user, session_id) = match state
        .auth
        .login(form.email.as_deref(), form.password.as_deref())
        .await
    {
        Ok(logged_in) => logged_in,
        Err(CoordinationError::InvalidArgument(msg)) => {
            return Err(ApiError::error(StatusCode::BAD_REQUEST, msg));
        }
        Err(CoordinationError::UserNotFound) => {
            return Err(ApiError::error(
                StatusCode::NOT_FOUND,
                "no user found for this email",
            ));
        }
        Err(CoordinationError::WrongPassword) => {
            return Err(ApiError::error(StatusCode::UNAUTHORIZED, "wrong password"));
        }
        Err(e) => return Err(e.into()),
    };

    let mut headers = HeaderMap::new();
    set_session_cookie(&mut headers, &session_id, state.auth.sessions().config())
        .into_response_error()?;

    Ok((headers, Json(user)).into_response())
}

/// `DELETE /auth_session/logout`
pub(crate) async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session_id = session_id_from_headers(&headers).into_response_error()?;

    match state.auth.logout(session_id).await {
        Ok(()) => {}
        Err(CoordinationError::Session(SessionError::NotFound)) => {
            return Err(ApiError::error(StatusCode::NOT_FOUND, "session not found"));
        }
        Err(e) => return Err(e.into()),
    }

    let mut response_headers = HeaderMap::new();
    clear_session_cookie(&mut response_headers).into_response_error()?;

    Ok((response_headers, Json(json!({}))).into_response())
}
