//! trello-stats - per-member report of finished Trello cards
//!
//! This library finds cards in an organization's "Done" lists that were edited
//! within a trailing window, groups them by assigned member, and renders a
//! plain-text summary suitable for a periodic team retrospective.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Credentials, target organization, and query window
//! - `error`: Custom error types
//! - `models`: Organization, card, and member snapshots
//! - `client`: Trello REST session behind the `TrelloApi` trait
//! - `reports`: Grouping and report rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use trello_stats::client::TrelloClient;
//! use trello_stats::config::{Settings, SettingsInput};
//!
//! let settings = Settings::resolve(input, chrono::Local::now().date_naive())?;
//! let client = TrelloClient::new(&settings.api_url, settings.credentials.clone())?;
//! let report = trello_stats::reports::run(&settings, &client)?;
//! print!("{}", report.format_terminal());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;

pub use error::{StatsError, StatsResult};
