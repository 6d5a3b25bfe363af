//! Authentication coordination
//!
//! Ties the session manager, the user store and password hashing together into the
//! register / login / current user / logout flows used by the HTTP layer.

mod access;
mod auth;
mod errors;

pub use access::require_auth;
pub use auth::AuthService;
pub use errors::CoordinationError;
