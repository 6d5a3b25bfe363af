mod cookie;
mod manager;

pub use cookie::{
    clear_session_cookie, session_id_from_headers, set_session_cookie,
};
pub use manager::SessionManager;
