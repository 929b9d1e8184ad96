use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when a failed fetch carries no message of its own.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch cities";

/// Everything that can go wrong while reading the city document.
///
/// The variants only exist for logs; the screen flattens all of them into a
/// single "fetch failed" message via [`FetchError::user_message`].
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchError {
    #[error("{message}")]
    Transport { message: String },

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("invalid response body: {reason}")]
    Decode { reason: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FETCH_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid store config: {0}")]
    InvalidJson(String),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("access key cannot be empty")]
    EmptyAccessKey,
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e.to_string())
    }
}
