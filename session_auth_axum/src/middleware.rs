use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::session::authenticate;
use crate::state::AuthState;

/// Reject requests without a valid credential, except on excluded paths.
///
/// Answers 401 when no credential is presented and 403 when it does not identify a user.
/// On success the [`AuthUser`](crate::AuthUser) is stored in the request extensions.
pub async fn require_auth(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if !session_auth::require_auth(Some(path), state.excluded_paths()) {
        tracing::trace!(path, "Path excluded from authentication");
        return next.run(req).await;
    }

    match authenticate(&state, req.headers()).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "Request authenticated");
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(rejection) => {
            tracing::debug!(path = req.uri().path(), ?rejection, "Request rejected");
            rejection.into_response()
        }
    }
}
