//! Team statistics report
//!
//! Groups finished cards by assigned member and renders the per-member
//! summary printed at the end of a run.

use std::collections::HashMap;

use super::member_cards::MemberCards;
use crate::models::{Card, CardId, Member, Organization, OrganizationId};

/// Search results reduced to one organization and grouped by member
#[derive(Debug, Clone, Default)]
pub struct CardGrouping {
    /// Retained cards by ID
    pub cards: HashMap<CardId, Card>,
    /// Member to card IDs, in search-result order
    pub members: MemberCards,
    /// Cards dropped because their board is outside the organization
    pub discarded: usize,
}

impl CardGrouping {
    /// Filter `cards` to `org_id` and group the survivors by member
    ///
    /// A card ID seen more than once is only recorded the first time.
    pub fn build(org_id: &OrganizationId, cards: Vec<Card>) -> Self {
        let mut grouping = Self::default();

        for card in cards {
            if !card.belongs_to(org_id) {
                tracing::debug!(
                    card = %card.id,
                    board = card.board_name(),
                    "skipping card outside organization"
                );
                grouping.discarded += 1;
                continue;
            }
            if grouping.cards.contains_key(&card.id) {
                continue;
            }

            for member in &card.id_members {
                grouping.members.push(member.clone(), card.id.clone());
            }
            grouping.cards.insert(card.id.clone(), card);
        }

        grouping
    }
}

/// One card line under a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub board_name: String,
    pub card_name: String,
}

/// One member's section of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSection {
    pub member: Member,
    pub cards: Vec<CardLine>,
}

impl MemberSection {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// Team statistics report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    /// Organization reported on
    pub organization: Organization,
    /// Number of cards retained after organization filtering
    pub total_cards: usize,
    /// Sections in first-encounter order
    pub members: Vec<MemberSection>,
}

impl TeamReport {
    /// Header naming the organization
    pub fn header(&self) -> String {
        format!(
            "=== Statistics for Trello Team '{}' ====",
            self.organization.label()
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push_str("\n\n");

        for section in &self.members {
            output.push_str(&format_section(section));
        }

        output
    }
}

/// Summary line plus one indented line per card
pub fn format_section(section: &MemberSection) -> String {
    let mut output = format!(
        "{} has {} cards\n",
        section.member.username,
        section.card_count()
    );
    for card in &section.cards {
        output.push_str(&format!(
            "   - Board: {} | Card: {}\n",
            card.board_name, card.card_name
        ));
    }
    output
}
