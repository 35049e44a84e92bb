//! Error taxonomy surfaced by the command layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::llm::{LlmError, Provider};

/// Errors the command surface knows how to present.
#[derive(Debug, Error)]
pub enum AppError {
    /// The config file could not be read or failed validation.
    ///
    /// Recovered by falling back to defaults; never aborts a command.
    #[error("Failed to load config file {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// The selected provider needs a credential that is not set.
    #[error(
        "Missing {var} environment variable for {provider}\n\n\
         Set the required API key in your environment:\n  \
         export {var}=\"your-api-key\"\n\n\
         Or add it to your .env file or ~/.quill.env"
    )]
    MissingCredential { provider: Provider, var: &'static str },

    #[error("No input provided")]
    EmptyInput,

    #[error("Input file does not exist: {}", .0.display())]
    MissingInputSource(PathBuf),

    #[error(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the input into smaller parts.",
        megabytes(.size)
    )]
    InputTooLarge { size: usize },

    #[error("Failed to read input: {0}")]
    ReadInput(#[from] std::io::Error),

    /// The provider call failed; carries the provider/model it was made against.
    #[error("AI request to {provider} ({model}) failed: {source}")]
    RequestFailure {
        provider: Provider,
        model: String,
        source: LlmError,
    },

    #[error("Operation cancelled by user")]
    UserCancelled,
}

fn megabytes(size: &usize) -> f64 {
    *size as f64 / 1024.0 / 1024.0
}

impl AppError {
    /// Returns `true` if the error represents a user-initiated cancellation.
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled)
    }
}
