//! Card search query construction
//!
//! Trello's search endpoint takes a free-text query with provider-specific
//! operators plus a set of field selectors. This module builds both.

use crate::models::OrganizationId;

/// Maximum number of cards the search endpoint returns per call
pub const CARDS_LIMIT: u32 = 1000;

/// Card fields requested from search
pub const CARD_FIELDS: &str = "name,idMembers";

/// Board fields embedded on each card
pub const BOARD_FIELDS: &str = "name,idOrganization";

/// Query text: cards currently in `list`, edited within the last `days` days
pub fn done_query(list: &str, days: u32) -> String {
    let list = if list.chars().any(char::is_whitespace) {
        format!("\"{}\"", list)
    } else {
        list.to_string()
    };
    format!("list:{} edited:{}", list, days)
}

/// Parameters for one scoped card search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSearch {
    pub query: String,
    pub org_id: OrganizationId,
}

impl CardSearch {
    pub fn new(query: impl Into<String>, org_id: OrganizationId) -> Self {
        Self {
            query: query.into(),
            org_id,
        }
    }

    /// Query-string pairs for `GET /search`
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("idOrganizations", self.org_id.to_string()),
            ("card_fields", CARD_FIELDS.to_string()),
            ("board_fields", BOARD_FIELDS.to_string()),
            ("card_board", "true".to_string()),
            ("cards_limit", CARDS_LIMIT.to_string()),
        ]
    }
}
