//! Global output configuration and response rendering.
//!
//! - Responses go to stdout (for piping)
//! - Status messages, progress, warnings, and logs go to stderr
//! - Colors can be disabled via the NO_COLOR environment variable

mod format;

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{DisplayFormat, display_response, render};

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Debug detail is only known once a command has merged its config,
/// so it lives apart from the write-once settings.
static DEBUG: AtomicBool = AtomicBool::new(false);

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Get the output configuration, read from the environment on first use.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Enables full error details at the top-level error boundary.
pub fn set_debug(debug: bool) {
    DEBUG.store(debug, Ordering::Relaxed);
}

pub fn is_debug() -> bool {
    DEBUG.load(Ordering::Relaxed)
}
