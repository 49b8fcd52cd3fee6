//! Custom error types for trello-stats
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for trello-stats operations
#[derive(Error, Debug)]
pub enum StatsError {
    /// Missing or unusable credentials and settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that parsed but cannot be used (e.g. a start date in the future)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response from the Trello API
    #[error("HTTP {status} from {endpoint}: {body}")]
    Http {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("JSON error: {0}")]
    Json(String),
}

impl StatsError {
    /// Create an HTTP error for a failed endpoint call
    pub fn http(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for trello-stats operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::Config("TRELLO_API_KEY is not set".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: TRELLO_API_KEY is not set"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_http_error() {
        let err = StatsError::http("/organizations/redhatcop", 404, "model not found");
        assert_eq!(
            err.to_string(),
            "HTTP 404 from /organizations/redhatcop: model not found"
        );
        assert!(matches!(err, StatsError::Http { status: 404, .. }));
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StatsError = json_err.into();
        assert!(matches!(err, StatsError::Json(_)));
    }
}
