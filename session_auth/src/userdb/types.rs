use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A principal that can log in with email and password
#[derive(Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique user identifier (uuid v4)
    pub id: String,
    /// Login identifier, unique across users
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Pending password reset token, if any
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            hashed_password,
            first_name: None,
            last_name: None,
            reset_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "first last" when both are set, whichever one is set, else the email
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().filter(|s| !s.is_empty());
        let last = self.last_name.as_deref().filter(|s| !s.is_empty());
        match (first, last) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => self.email.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hashed_password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("reset_token", &self.reset_token.as_ref().map(|_| "<redacted>"))
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Lookup criteria for [`UserStore::find_user_by`](crate::UserStore::find_user_by)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSearchField {
    Id(String),
    Email(String),
}

impl fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSearchField::Id(id) => write!(f, "id={id}"),
            UserSearchField::Email(_) => write!(f, "email=<redacted>"),
        }
    }
}

/// Fields to change on an existing user. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hashed_password: Option<String>,
    pub reset_token: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.hashed_password.is_none()
            && self.reset_token.is_none()
    }

    pub(crate) fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(hashed_password) = self.hashed_password {
            user.hashed_password = hashed_password;
        }
        if let Some(reset_token) = self.reset_token {
            user.reset_token = Some(reset_token);
        }
    }
}
