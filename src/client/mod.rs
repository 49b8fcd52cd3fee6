//! Trello API access
//!
//! [`TrelloApi`] is the seam between report building and the network: the
//! real [`TrelloClient`] talks HTTP, tests substitute canned responses.

pub mod search;
pub mod trello;

pub use search::{done_query, CardSearch};
pub use trello::TrelloClient;

use crate::error::StatsResult;
use crate::models::{Card, Member, MemberId, Organization};

/// Read-only Trello operations used by a report run
///
/// Each call is a single round trip with no retry or caching.
pub trait TrelloApi {
    /// `GET /organizations/{name}`
    fn resolve_organization(&self, name: &str) -> StatsResult<Organization>;

    /// `GET /search`, scoped to one organization
    fn search_cards(&self, search: &CardSearch) -> StatsResult<Vec<Card>>;

    /// `GET /members/{id}`
    fn get_member(&self, member_id: &MemberId) -> StatsResult<Member>;
}
