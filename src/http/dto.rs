//! Response bodies that are not weekday reports.

use serde::{Deserialize, Serialize};

/// Entry of the users dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListItem {
    pub user_id: u32,
    pub name: String,
}
