//! Data sources: presence CSV and users XML. Both are read in full on every
//! call; nothing is cached between calls.

pub mod presence;
pub mod users;

pub use presence::{get_data, get_user_timetable};
pub use users::get_users;
