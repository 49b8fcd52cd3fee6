//! Data models for trello-stats
//!
//! Read-only snapshots of the Trello entities a report touches: the
//! organization, the cards found by search, and the members assigned to them.

pub mod card;
pub mod ids;
pub mod member;
pub mod organization;

pub use card::{BoardRef, Card, SearchResults};
pub use ids::{CardId, MemberId, OrganizationId};
pub use member::Member;
pub use organization::Organization;
