//! Reports module for trello-stats
//!
//! Drives one report run: resolve the organization, search its finished
//! cards, group them by member, and look up each member's profile.

pub mod member_cards;
pub mod team;

pub use member_cards::MemberCards;
pub use team::{CardGrouping, CardLine, MemberSection, TeamReport};

use crate::client::{done_query, CardSearch, TrelloApi};
use crate::config::Settings;
use crate::error::StatsResult;

/// Build the team report for `settings` using `api`
///
/// Calls are made in order and the first failure aborts the run; members
/// are fetched once each, in first-encounter order.
pub fn run(settings: &Settings, api: &impl TrelloApi) -> StatsResult<TeamReport> {
    let organization = api.resolve_organization(&settings.org_name)?;
    tracing::debug!(
        org = %organization.id,
        name = %organization.name,
        "resolved organization"
    );

    let search = CardSearch::new(
        done_query(&settings.list_name, settings.days),
        organization.id.clone(),
    );
    let cards = api.search_cards(&search)?;
    let returned = cards.len();

    let grouping = CardGrouping::build(&organization.id, cards);
    tracing::info!(
        returned,
        retained = grouping.cards.len(),
        discarded = grouping.discarded,
        members = grouping.members.len(),
        "grouped search results"
    );

    let mut members = Vec::with_capacity(grouping.members.len());
    for (member_id, card_ids) in grouping.members.iter() {
        let member = api.get_member(member_id)?;
        let cards = card_ids
            .iter()
            .filter_map(|id| grouping.cards.get(id))
            .map(|card| CardLine {
                board_name: card.board_name().to_string(),
                card_name: card.name.clone(),
            })
            .collect();
        members.push(MemberSection { member, cards });
    }

    Ok(TeamReport {
        organization,
        total_cards: grouping.cards.len(),
        members,
    })
}
