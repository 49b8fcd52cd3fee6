//! Blocking Trello REST session
//!
//! One `reqwest` blocking client is shared by every call of a run. The API
//! key and token ride along as query parameters on each request.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::search::CardSearch;
use super::TrelloApi;
use crate::config::Credentials;
use crate::error::{StatsError, StatsResult};
use crate::models::{Card, Member, MemberId, Organization, SearchResults};

/// Authenticated Trello session
pub struct TrelloClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl TrelloClient {
    /// Create a session against `base_url` (e.g. `https://api.trello.com/1`)
    pub fn new(base_url: &str, credentials: Credentials) -> StatsResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StatsError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StatsError::Config(format!(
                "Invalid API URL '{}': not a base URL",
                base_url
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("trello-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Build an authenticated GET for the given path segments
    fn request(&self, segments: &[&str], params: &[(&str, String)]) -> StatsResult<RequestBuilder> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StatsError::Config(format!("Invalid API URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(self
            .http
            .get(url)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("token", self.credentials.api_token.as_str()),
            ])
            .query(params))
    }

    /// Send a GET and decode the JSON body, failing on any non-2xx status
    fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> StatsResult<T> {
        let endpoint = format!("/{}", segments.join("/"));
        tracing::debug!(endpoint = %endpoint, "GET");

        let response = self.request(segments, params)?.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(StatsError::http(endpoint, status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| StatsError::Json(format!("Unexpected response from {}: {}", endpoint, e)))
    }
}

impl TrelloApi for TrelloClient {
    fn resolve_organization(&self, name: &str) -> StatsResult<Organization> {
        self.get_json(&["organizations", name], &[])
    }

    fn search_cards(&self, search: &CardSearch) -> StatsResult<Vec<Card>> {
        tracing::debug!(query = %search.query, "searching cards");
        let results: SearchResults = self.get_json(&["search"], &search.params())?;
        Ok(results.cards)
    }

    fn get_member(&self, member_id: &MemberId) -> StatsResult<Member> {
        self.get_json(&["members", member_id.as_str()], &[])
    }
}
