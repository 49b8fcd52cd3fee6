//! Organization model

use serde::Deserialize;

use super::ids::OrganizationId;

/// A Trello organization (workspace)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,

    /// Short name used in URLs
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

impl Organization {
    /// Name to show in the report header
    ///
    /// Prefers the display name and falls back to the short name.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.name,
        }
    }
}
