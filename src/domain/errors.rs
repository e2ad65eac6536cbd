//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Slack answered with `ok: false`. `data` is the full response payload.
    #[error("Slack API error: {code}")]
    SlackApi {
        code: String,
        data: serde_json::Value,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Slack error code, if this is an API-level failure.
    pub fn slack_code(&self) -> Option<&str> {
        match self {
            DomainError::SlackApi { code, .. } => Some(code),
            _ => None,
        }
    }
}
