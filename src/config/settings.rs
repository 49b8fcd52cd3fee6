//! Run settings for trello-stats
//!
//! Collects the API credentials, target organization, and query window into a
//! single value. Resolution is a pure function of its inputs; the argument
//! layer is responsible for reading the environment.

use chrono::NaiveDate;

use super::window;
use crate::error::{StatsError, StatsResult};

/// Environment variable holding the Trello API key
pub const API_KEY_VAR: &str = "TRELLO_API_KEY";

/// Environment variable holding the Trello API token
pub const API_TOKEN_VAR: &str = "TRELLO_API_TOKEN";

/// Organization reported on when none is given
pub const DEFAULT_ORG_NAME: &str = "redhatcop";

/// List whose cards count as finished
pub const DEFAULT_LIST_NAME: &str = "Done";

/// Trello REST API root
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

/// API key and token attached to every request
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Unresolved inputs, as gathered from flags and environment
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    pub api_key: Option<String>,
    pub api_token: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub org_name: Option<String>,
    pub list_name: Option<String>,
    pub api_url: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// API credentials
    pub credentials: Credentials,
    /// Organization short name, as used in `/organizations/{name}`
    pub org_name: String,
    /// List name for the `list:` search filter
    pub list_name: String,
    /// First day of the window
    pub start_date: NaiveDate,
    /// Trailing window length in days
    pub days: u32,
    /// API root without trailing slash
    pub api_url: String,
}

impl Settings {
    /// Resolve settings against `today`
    ///
    /// Missing credentials fail with [`StatsError::Config`]; a start date
    /// after `today` fails with [`StatsError::Validation`].
    pub fn resolve(input: SettingsInput, today: NaiveDate) -> StatsResult<Self> {
        let api_key = non_empty(input.api_key);
        let api_token = non_empty(input.api_token);

        let (api_key, api_token) = match (api_key, api_token) {
            (Some(key), Some(token)) => (key, token),
            (key, token) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                if token.is_none() {
                    missing.push(API_TOKEN_VAR);
                }
                return Err(StatsError::Config(format!(
                    "Trello API Key and API Token are required (missing {})",
                    missing.join(", ")
                )));
            }
        };

        let start_date = input
            .start_date
            .unwrap_or_else(|| window::default_start_date(today));
        let days = window::trailing_days(start_date, today)?;

        let api_url = non_empty(input.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            credentials: Credentials { api_key, api_token },
            org_name: non_empty(input.org_name).unwrap_or_else(|| DEFAULT_ORG_NAME.to_string()),
            list_name: non_empty(input.list_name)
                .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string()),
            start_date,
            days,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
