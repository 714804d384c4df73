//! Prediction collaborator abstraction
//!
//! ```text
//! ForecastRequest {system, task} ──► Forecaster::submit ──► narrative text
//!                                        │
//!                                        └── OpenAiForecaster (chat completions)
//! ```

pub mod openai;
pub mod prompt;

pub use openai::OpenAiForecaster;

use async_trait::async_trait;
use std::fmt;

/// Errors from a collaborator exchange
#[derive(Debug)]
pub enum CollaboratorError {
    Http(reqwest::Error),
    Serialization(serde_json::Error),
    Api { status: u16, message: String },
    EmptyResponse,
    Timeout(u64),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Http(e) => write!(f, "HTTP transport error: {}", e),
            CollaboratorError::Serialization(e) => write!(f, "request serialization error: {}", e),
            CollaboratorError::Api { status, message } => {
                write!(f, "API returned status {}: {}", status, message)
            }
            CollaboratorError::EmptyResponse => write!(f, "API returned an empty completion"),
            CollaboratorError::Timeout(secs) => write!(f, "no reply within {}s", secs),
        }
    }
}

impl std::error::Error for CollaboratorError {}

impl From<reqwest::Error> for CollaboratorError {
    fn from(e: reqwest::Error) -> Self {
        CollaboratorError::Http(e)
    }
}

impl From<serde_json::Error> for CollaboratorError {
    fn from(e: serde_json::Error) -> Self {
        CollaboratorError::Serialization(e)
    }
}

/// One prompt exchange: system framing plus the user task
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub system: String,
    pub task: String,
}

/// A collaborator that turns analysis context into prediction narrative
#[async_trait]
pub trait Forecaster: Send + Sync {
    async fn submit(&self, request: &ForecastRequest) -> Result<String, CollaboratorError>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let api = CollaboratorError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(api.to_string(), "API returned status 429: rate limited");
        assert_eq!(
            CollaboratorError::Timeout(120).to_string(),
            "no reply within 120s"
        );
        assert_eq!(
            CollaboratorError::EmptyResponse.to_string(),
            "API returned an empty completion"
        );
    }

    #[test]
    fn test_serialization_error_from() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = CollaboratorError::from(bad);
        assert!(matches!(err, CollaboratorError::Serialization(_)));
    }
}
