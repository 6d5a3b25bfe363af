use std::{env, sync::LazyLock};

use crate::storage::{DB_TABLE_PREFIX, connect_data_store};
use crate::userdb::errors::UserError;

use super::store_type::UserStore;

/// Users table name
pub static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "users"))
});

/// Connection URL of the user database
static USER_DB_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("USER_DB_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
});

/// Build and initialize a [`UserStore`] from `USER_DB_URL`
pub async fn user_store_from_env() -> Result<UserStore, UserError> {
    let store = UserStore::new(connect_data_store(USER_DB_URL.as_str())?);
    store.init().await?;
    Ok(store)
}
