use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::{Value, json};
use session_auth::{CoordinationError, SessionError, UserError};

/// JSON error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// `{"error": message}`
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// `{"message": message}`
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "message": message.into() }))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ApiError>;
}

impl From<CoordinationError> for ApiError {
    fn from(err: CoordinationError) -> Self {
        let err = err.log();
        let status = coordination_status(&err);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            ApiError::error(status, "internal error")
        } else {
            ApiError::error(status, err.to_string())
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        CoordinationError::Session(err).into()
    }
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(ApiError::from)
    }
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(ApiError::from)
    }
}

pub(crate) fn coordination_status(err: &CoordinationError) -> StatusCode {
    match err {
        CoordinationError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        CoordinationError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
        CoordinationError::UserNotFound => StatusCode::NOT_FOUND,
        CoordinationError::WrongPassword => StatusCode::UNAUTHORIZED,
        CoordinationError::Unauthorized => StatusCode::UNAUTHORIZED,
        CoordinationError::Session(SessionError::NotFound) => StatusCode::FORBIDDEN,
        CoordinationError::Session(SessionError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
        CoordinationError::Session(SessionError::HeaderError(_)) => StatusCode::BAD_REQUEST,
        CoordinationError::User(UserError::NotFound) => StatusCode::NOT_FOUND,
        CoordinationError::User(UserError::AlreadyExists(_)) => StatusCode::BAD_REQUEST,
        CoordinationError::User(UserError::InvalidData(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
