//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with a response on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "quill=debug" } else { "quill=warn" }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the `debug` flag. Only the first call
/// has an effect.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(!crate::output::is_no_color()),
        )
        .try_init();
}
