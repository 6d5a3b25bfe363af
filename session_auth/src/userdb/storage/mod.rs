mod config;
mod postgres;
mod sqlite;
mod store_type;

pub use config::{DB_TABLE_USERS, user_store_from_env};
pub use store_type::UserStore;
