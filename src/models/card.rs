//! Card model
//!
//! Cards come from the search endpoint with their board embedded, so each
//! card carries enough to decide organization membership and to print the
//! board name without a second lookup.

use serde::Deserialize;

use super::ids::{CardId, MemberId, OrganizationId};

/// Board fields embedded on a search result card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRef {
    #[serde(default)]
    pub name: String,

    /// Owning organization; personal boards have none
    #[serde(default)]
    pub id_organization: Option<OrganizationId>,
}

/// A card as returned by search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,

    #[serde(default)]
    pub name: String,

    /// Assigned members, in board order
    #[serde(default)]
    pub id_members: Vec<MemberId>,

    #[serde(default)]
    pub board: Option<BoardRef>,
}

impl Card {
    /// Whether this card's board belongs to `org_id`
    ///
    /// Exact comparison; a card without board data never belongs.
    pub fn belongs_to(&self, org_id: &OrganizationId) -> bool {
        self.board
            .as_ref()
            .and_then(|b| b.id_organization.as_ref())
            .is_some_and(|id| id == org_id)
    }

    /// Board name, or an empty string when the board was not embedded
    pub fn board_name(&self) -> &str {
        self.board.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }
}

/// Body of `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_card() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": "c1",
                "name": "Fix bug",
                "idMembers": ["m1", "m2"],
                "board": {"name": "B1", "idOrganization": "o1"}
            }"#,
        )
        .unwrap();

        assert_eq!(card.id, CardId::from("c1"));
        assert_eq!(card.id_members, vec![MemberId::from("m1"), MemberId::from("m2")]);
        assert_eq!(card.board_name(), "B1");
        assert!(card.belongs_to(&OrganizationId::from("o1")));
    }

    #[test]
    fn test_missing_members_is_empty() {
        let card: Card = serde_json::from_str(
            r#"{"id": "c1", "name": "x", "board": {"name": "B1", "idOrganization": "o1"}}"#,
        )
        .unwrap();
        assert!(card.id_members.is_empty());
    }

    #[test]
    fn test_belongs_to_requires_exact_match() {
        let card: Card = serde_json::from_str(
            r#"{"id": "c1", "board": {"name": "B", "idOrganization": "o1"}}"#,
        )
        .unwrap();
        assert!(!card.belongs_to(&OrganizationId::from("o2")));
        assert!(!card.belongs_to(&OrganizationId::from("O1")));
        assert!(!card.belongs_to(&OrganizationId::from("o")));
    }

    #[test]
    fn test_null_organization_never_belongs() {
        let card: Card = serde_json::from_str(
            r#"{"id": "c1", "board": {"name": "Personal", "idOrganization": null}}"#,
        )
        .unwrap();
        assert!(!card.belongs_to(&OrganizationId::from("o1")));

        let bare: Card = serde_json::from_str(r#"{"id": "c2"}"#).unwrap();
        assert!(!bare.belongs_to(&OrganizationId::from("o1")));
        assert_eq!(bare.board_name(), "");
    }

    #[test]
    fn test_search_results_without_cards() {
        let results: SearchResults = serde_json::from_str(r#"{"boards": []}"#).unwrap();
        assert!(results.cards.is_empty());
    }
}
