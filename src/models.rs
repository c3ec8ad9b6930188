//! Board Models
//!
//! Data structures matching the remote board payload.

use serde::{Deserialize, Serialize};

/// Work ticket (matches the remote payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: i32,
    pub tag: Vec<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// User a ticket can be assigned to (matches the remote payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Full payload returned by the board endpoint.
///
/// Both fields are required: a payload carrying only one of the lists is a
/// deserialization error, never a partial load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardData {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}
