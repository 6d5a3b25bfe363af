use std::sync::Arc;

use crate::storage::DataStore;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField, UserUpdate},
};

use super::postgres::*;
use super::sqlite::*;

/// Principal store over a relational pool
#[derive(Clone, Debug)]
pub struct UserStore {
    store: Arc<dyn DataStore>,
}

impl UserStore {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        tracing::info!("Creating user store");
        Self { store }
    }

    fn unsupported() -> UserError {
        UserError::Storage("Unsupported database type".to_string())
    }

    /// Initialize the user database tables
    pub async fn init(&self) -> Result<(), UserError> {
        let store = self.store.as_ref();

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_user_tables_postgres(pool).await?;
                Ok(())
            }
            _ => Err(Self::unsupported()),
        }
    }

    /// Store a new user for `email`.
    ///
    /// Returns `AlreadyExists` when the email is already registered.
    #[tracing::instrument(skip(self, email, hashed_password))]
    pub async fn add_user(&self, email: &str, hashed_password: &str) -> Result<User, UserError> {
        if email.trim().is_empty() {
            return Err(UserError::InvalidData("email must not be empty".to_string()));
        }
        if hashed_password.is_empty() {
            return Err(UserError::InvalidData(
                "hashed password must not be empty".to_string(),
            ));
        }

        let user = User::new(email.to_string(), hashed_password.to_string());

        let inserted = if let Some(pool) = self.store.as_sqlite() {
            insert_user_sqlite(pool, &user).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_user_postgres(pool, &user).await
        } else {
            Err(Self::unsupported())
        }?;

        if !inserted {
            tracing::info!("User add refused, email already registered");
            return Err(UserError::AlreadyExists(email.to_string()));
        }

        tracing::info!(user_id = %user.id, "User added");
        Ok(user)
    }

    #[tracing::instrument(skip(self, field), fields(user_field = %field))]
    pub async fn find_user_by(&self, field: UserSearchField) -> Result<Option<User>, UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            get_user_by_field_sqlite(pool, &field).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_by_field_postgres(pool, &field).await
        } else {
            Err(Self::unsupported())
        };

        match &result {
            Ok(Some(_)) => {
                tracing::debug!(found = true, "User lookup completed");
            }
            Ok(None) => {
                tracing::debug!(found = false, "User lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
            }
        }

        result
    }

    /// Get a user by their ID
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, UserError> {
        self.find_user_by(UserSearchField::Id(id.to_string())).await
    }

    /// Apply `update` to the user `id` and return the updated user.
    ///
    /// Returns `NotFound` if no user has that id. An empty update changes nothing.
    #[tracing::instrument(skip(self, id, update), fields(user_id = %id))]
    pub async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User, UserError> {
        if update.is_empty() {
            return self.get_user(id).await?.ok_or(UserError::NotFound);
        }

        let updated = if let Some(pool) = self.store.as_sqlite() {
            update_user_sqlite(pool, id, &update).await
        } else if let Some(pool) = self.store.as_postgres() {
            update_user_postgres(pool, id, &update).await
        } else {
            Err(Self::unsupported())
        }?;

        if !updated {
            return Err(UserError::NotFound);
        }

        tracing::info!("User updated");
        self.get_user(id).await?.ok_or(UserError::NotFound)
    }

    #[tracing::instrument(skip(self, id), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &str) -> Result<(), UserError> {
        let deleted = if let Some(pool) = self.store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(Self::unsupported())
        }?;

        if deleted {
            tracing::info!("User deleted");
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }
}
