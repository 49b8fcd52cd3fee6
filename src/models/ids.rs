//! Strongly-typed ID wrappers for Trello entities
//!
//! Trello identifiers are opaque strings. Wrapping them keeps a member ID from
//! being passed where a card or organization ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from its string form
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(OrganizationId);
define_id!(CardId);
define_id!(MemberId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = CardId::new("5f1a2b3c");
        assert_eq!(id.to_string(), "5f1a2b3c");
        assert_eq!(id.as_str(), "5f1a2b3c");
    }

    #[test]
    fn test_id_deserializes_from_plain_string() {
        let id: MemberId = serde_json::from_str("\"m1\"").unwrap();
        assert_eq!(id, MemberId::from("m1"));
    }

    #[test]
    fn test_id_comparison_is_exact() {
        assert_ne!(OrganizationId::from("o1"), OrganizationId::from("O1"));
        assert_ne!(OrganizationId::from("o1"), OrganizationId::from("o10"));
    }
}
