//! Error types for the provider client.

use thiserror::Error;

/// Errors raised while talking to a provider endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Connection or transport failure before a response was received.
    #[error("Failed to connect to {url}: {reason}")]
    Http { url: String, reason: String },

    /// The endpoint answered with a non-success status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response stream broke or carried an error event.
    #[error("Stream error: {0}")]
    Stream(String),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
