//! Member model

use serde::Deserialize;

use super::ids::MemberId;

/// A Trello member profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
}
