use crate::errors::AppResult;
use crate::models::User;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

// <intranet>
//   <server><host>..</host><port>..</port><protocol>https</protocol></server>
//   <users><user id="141"><avatar>/api/images/users/141</avatar><name>Adam P.</name></user></users>
// </intranet>
#[derive(Debug, Deserialize)]
struct Intranet {
    server: Server,
    users: Users,
}

#[derive(Debug, Deserialize)]
struct Server {
    host: String,
    protocol: String,
}

#[derive(Debug, Deserialize)]
struct Users {
    #[serde(rename = "user", default)]
    users: Vec<UserNode>,
}

#[derive(Debug, Deserialize)]
struct UserNode {
    #[serde(rename = "@id")]
    id: u32,
    avatar: String,
    name: String,
}

/// Read users (name and absolute avatar URL) keyed by user id.
pub fn get_users(path: &Path) -> AppResult<BTreeMap<u32, User>> {
    let content = fs::read_to_string(path)?;
    parse_users(&content)
}

pub fn parse_users(content: &str) -> AppResult<BTreeMap<u32, User>> {
    let intranet: Intranet = quick_xml::de::from_str(content)?;
    let base_path = format!("{}://{}", intranet.server.protocol, intranet.server.host);

    let users: BTreeMap<u32, User> = intranet
        .users
        .users
        .into_iter()
        .map(|u| {
            let user = User {
                id: u.id,
                name: u.name,
                avatar: format!("{}{}", base_path, u.avatar),
            };
            (user.id, user)
        })
        .collect();

    debug!(users = users.len(), "users loaded");
    Ok(users)
}
