//! Application identity and one-time process initialization.

/// Human-readable application title.
pub const APP_TITLE: &str = "Quill";

/// Binary name, also used for the per-user dotfiles (`~/.quill.toml`, `~/.quill.env`).
pub const APP_BINARY: &str = "quill";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The user agent sent with provider requests, e.g. `Quill 0.1.0`.
pub fn user_agent() -> String {
    format!("{APP_TITLE} {VERSION}")
}

/// Exports `USER_AGENT` for any library that reads it from the environment.
///
/// Must be called once from `main` before the async runtime or any other thread starts.
pub fn init_user_agent() {
    // SAFETY: called at the top of `main`, before the runtime is built, while
    // the process is still single-threaded.
    unsafe {
        std::env::set_var("USER_AGENT", user_agent());
    }
}
