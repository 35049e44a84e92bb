//! Path resolution for the config file and dotenv files.
//!
//! A project-local file in the current directory always takes precedence
//! over the per-user dotfile in the home directory.

use std::path::{Path, PathBuf};

use crate::app::APP_BINARY;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "config.toml";

/// Returns the config file to use.
///
/// Resolution order:
/// 1. `./config.toml` if it exists
/// 2. `~/.quill.toml` otherwise (whether or not it exists)
pub fn config_file_path() -> PathBuf {
    resolve_config_path(Path::new("."), &home_dir())
}

fn resolve_config_path(current_dir: &Path, home: &Path) -> PathBuf {
    let local = current_dir.join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return local;
    }
    home.join(format!(".{APP_BINARY}.toml"))
}

/// Returns the dotenv files in precedence order: `./.env`, then `~/.quill.env`.
pub fn env_file_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(".env"),
        home_dir().join(format!(".{APP_BINARY}.env")),
    ]
}

/// Returns the user's home directory, or the current directory if it cannot be determined.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
