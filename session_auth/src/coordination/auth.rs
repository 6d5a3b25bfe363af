use crate::credentials::{
    BCRYPT_COST, PasswordError, hash_password_with_cost, parse_basic_authorization,
    verify_password,
};
use crate::session::{SessionError, SessionManager};
use crate::userdb::{User, UserError, UserSearchField, UserStore};

use super::errors::CoordinationError;

/// Register, login, logout and current-user flows over a session manager and a user store
#[derive(Clone, Debug)]
pub struct AuthService {
    sessions: SessionManager,
    users: UserStore,
    password_cost: u32,
}

impl AuthService {
    pub fn new(sessions: SessionManager, users: UserStore) -> Self {
        Self {
            sessions,
            users,
            password_cost: *BCRYPT_COST,
        }
    }

    /// Override the bcrypt cost used for new password hashes
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Create a user with a bcrypt-hashed password
    pub async fn register_user<'a>(
        &self,
        email: impl Into<Option<&'a str>>,
        password: impl Into<Option<&'a str>>,
    ) -> Result<User, CoordinationError> {
        let email = required(email.into(), "email")?;
        let password = required(password.into(), "password")?;

        if self
            .users
            .find_user_by(UserSearchField::Email(email.to_string()))
            .await?
            .is_some()
        {
            return Err(CoordinationError::AlreadyExists(email.to_string()));
        }

        let hashed = self.hash(password).await?;
        match self.users.add_user(email, &hashed).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "User registered");
                Ok(user)
            }
            // Lost a race with a concurrent registration of the same email
            Err(UserError::AlreadyExists(email)) => Err(CoordinationError::AlreadyExists(email)),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether `email` and `password` identify a registered user
    pub async fn valid_login<'a>(
        &self,
        email: impl Into<Option<&'a str>>,
        password: impl Into<Option<&'a str>>,
    ) -> Result<bool, CoordinationError> {
        match self.authenticate(email.into(), password.into()).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_internal() => Err(e),
            Err(_) => Ok(false),
        }
    }

    /// Check credentials and open a session for the user.
    ///
    /// # Errors
    /// * `InvalidArgument` when the email or password is missing
    /// * `UserNotFound` when no user has that email
    /// * `WrongPassword` when the password does not match
    pub async fn login<'a>(
        &self,
        email: impl Into<Option<&'a str>>,
        password: impl Into<Option<&'a str>>,
    ) -> Result<(User, String), CoordinationError> {
        let user = self.authenticate(email.into(), password.into()).await?;
        let session_id = self.sessions.create_session(user.id.as_str()).await?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok((user, session_id))
    }

    /// The user owning `session_id`.
    ///
    /// A session whose user has since been deleted counts as not found.
    pub async fn current_user<'a>(
        &self,
        session_id: impl Into<Option<&'a str>>,
    ) -> Result<User, CoordinationError> {
        let user_id = self.sessions.resolve_session(session_id).await?;

        match self.users.get_user(&user_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(user_id = %user_id, "Session refers to a missing user");
                Err(SessionError::NotFound.into())
            }
        }
    }

    pub async fn logout<'a>(
        &self,
        session_id: impl Into<Option<&'a str>>,
    ) -> Result<(), CoordinationError> {
        self.sessions.destroy_session(session_id).await?;
        tracing::debug!("User logged out");
        Ok(())
    }

    /// Authenticate a request from its raw `Authorization: Basic ...` header value
    pub async fn current_user_from_basic<'a>(
        &self,
        authorization: impl Into<Option<&'a str>>,
    ) -> Result<User, CoordinationError> {
        let credentials =
            parse_basic_authorization(authorization.into()).ok_or(CoordinationError::Unauthorized)?;

        self.authenticate(
            Some(credentials.email.as_str()),
            Some(credentials.password.as_str()),
        )
        .await
    }

    async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, CoordinationError> {
        let email = required(email, "email")?;
        let password = required(password, "password")?;

        let user = self
            .users
            .find_user_by(UserSearchField::Email(email.to_string()))
            .await?
            .ok_or(CoordinationError::UserNotFound)?;

        if self.verify(&user.hashed_password, password).await {
            Ok(user)
        } else {
            Err(CoordinationError::WrongPassword)
        }
    }

    /// bcrypt is CPU bound, so it runs off the async workers
    async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_string();
        let cost = self.password_cost;
        tokio::task::spawn_blocking(move || hash_password_with_cost(&password, cost))
            .await
            .map_err(|e| PasswordError::Hash(e.to_string()))?
    }

    async fn verify(&self, hashed_password: &str, password: &str) -> bool {
        let hashed_password = hashed_password.to_string();
        let password = password.to_string();
        match tokio::task::spawn_blocking(move || verify_password(&hashed_password, &password))
            .await
        {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, CoordinationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoordinationError::InvalidArgument(format!("{name} missing")))
}
