use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    /// Absolute avatar URL (`protocol://host/path`).
    pub avatar: String,
}
