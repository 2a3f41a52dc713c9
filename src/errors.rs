// src/errors.rs
// DOCUMENTATION: Custom error types for the web client
// PURPOSE: Centralized error handling for API calls and page flows

use thiserror::Error;

/// Client-side error types
/// DOCUMENTATION: Every failure an API call or page flow can produce.
/// Flows turn these into human-readable alerts; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Non-2xx response; `message` is the server-provided text or the status text
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Place id missing from page URL")]
    MissingPlaceId,
}

impl ClientError {
    /// Server-provided message for HTTP-level failures
    /// DOCUMENTATION: Only `Api` errors carry a message fit for display;
    /// transport and parse failures get a generic alert instead
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_) | ClientError::Decode(_) | ClientError::Request(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::Request(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Request(err.to_string())
    }
}
