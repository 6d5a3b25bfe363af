//! User registration and profile endpoints

use axum::{Form, Json, extract::State};
use http::StatusCode;
use serde_json::{Value, json};

use session_auth::CoordinationError;

use crate::auth_session::CredentialsForm;
use crate::error::ApiError;
use crate::session::AuthUser;
use crate::state::AuthState;

/// `POST /users`
pub(crate) async fn register(
    State(state): State<AuthState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Json<Value>, ApiError> {
    match state
        .auth
        .register_user(form.email.as_deref(), form.password.as_deref())
        .await
    {
        Ok(user) => Ok(Json(json!({ "email": user.email, "message": "user created" }))),
        Err(CoordinationError::AlreadyExists(_)) => Err(ApiError::message(
            StatusCode::BAD_REQUEST,
            "email already registered",
        )),
        Err(e) => Err(e.into()),
    }
}

/// `GET /users/me`
pub(crate) async fn me(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}
