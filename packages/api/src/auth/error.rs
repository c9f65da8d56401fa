//! Normalised failure type for every gateway call.

use serde::Deserialize;
use thiserror::Error;

/// Why a lifecycle call failed.
///
/// Transport-level failures (`Timeout`, `Transport`) never reached a backend
/// answer; `Backend` carries the status and the human-readable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("Request timed out")]
    Timeout,
    #[error("{0}")]
    Transport(String),
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Error body shape the backend uses: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AuthError {
    /// Build a `Backend` error from a non-2xx status and its raw body,
    /// preferring the backend's own `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        AuthError::Backend { status, message }
    }

    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else {
            AuthError::Transport(err.to_string())
        }
    }

    /// True if the request never got a backend answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, AuthError::Timeout | AuthError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The display message, or `fallback` when it is empty.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}
