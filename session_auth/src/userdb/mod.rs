mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::{DB_TABLE_USERS, UserStore, user_store_from_env};
pub use types::{User, UserSearchField, UserUpdate};
