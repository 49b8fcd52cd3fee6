//! Ordered member to card grouping
//!
//! Members keep the order in which they were first seen; each member's cards
//! keep the order in which they were recorded.

use std::collections::HashMap;

use crate::models::{CardId, MemberId};

/// Insertion-ordered multimap from member to card IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberCards {
    entries: Vec<(MemberId, Vec<CardId>)>,
    index: HashMap<MemberId, usize>,
}

impl MemberCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the member's card list, creating an empty one on first sight
    pub fn entry(&mut self, member: MemberId) -> &mut Vec<CardId> {
        let next = self.entries.len();
        let slot = *self.index.entry(member.clone()).or_insert(next);
        if slot == next {
            self.entries.push((member, Vec::new()));
        }
        &mut self.entries[slot].1
    }

    /// Record `card` for `member`
    ///
    /// Recording the same card twice for one member is a no-op.
    pub fn push(&mut self, member: MemberId, card: CardId) {
        let cards = self.entry(member);
        if !cards.contains(&card) {
            cards.push(card);
        }
    }

    pub fn get(&self, member: &MemberId) -> Option<&[CardId]> {
        self.index
            .get(member)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Members and their cards, in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, &[CardId])> {
        self.entries
            .iter()
            .map(|(member, cards)| (member, cards.as_slice()))
    }

    /// Number of distinct members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
