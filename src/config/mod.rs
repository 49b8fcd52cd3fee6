//! Configuration module for trello-stats
//!
//! This module provides run configuration including:
//! - API credential resolution
//! - Target organization and list selection
//! - Query window computation

pub mod settings;
pub mod window;

pub use settings::{Credentials, Settings, SettingsInput};
