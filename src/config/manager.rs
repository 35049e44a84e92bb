use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::temperature::Temperature;
use crate::error::AppError;
use crate::fs::atomic_write;
use crate::llm::Provider;
use crate::paths;
use crate::ui::Style;

/// The configuration file structure.
///
/// Corresponds to `./config.toml` or `~/.quill.toml`. Every field is optional
/// in the file; missing fields take their defaults and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Provider to send requests to.
    pub ai_provider: Provider,
    /// Model name; empty means the provider's default.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Use the provider's lighter/faster model when no model is named.
    pub light_model: bool,
    /// Override for the provider's OpenAI-compatible base URL.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub ai_base_url: Option<String>,
    /// Sampling temperature (0.0-2.0).
    pub temperature: Temperature,
    /// Print prompts, responses, and full error details.
    pub debug: bool,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Values supplied on the command line.
///
/// `None` means "not provided"; `Some(false)` and `Some(0.0)` are real overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub ai_provider: Option<Provider>,
    pub model: Option<String>,
    pub light_model: Option<bool>,
    pub ai_base_url: Option<String>,
    pub temperature: Option<Temperature>,
    pub debug: Option<bool>,
}

/// The effective configuration for one command invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub ai_provider: Provider,
    pub model: Option<String>,
    pub light_model: bool,
    pub ai_base_url: Option<String>,
    pub temperature: Temperature,
    pub debug: bool,
}

/// Merges CLI overrides over file values.
///
/// Precedence per field: CLI > config file > built-in default (already
/// applied when the file was loaded). Empty CLI strings count as absent.
pub fn merge_config(file_config: &ConfigFile, cli: &CliOverrides) -> AppConfig {
    let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());

    AppConfig {
        ai_provider: cli.ai_provider.unwrap_or(file_config.ai_provider),
        model: non_empty(&cli.model).or_else(|| file_config.model.clone()),
        light_model: cli.light_model.unwrap_or(file_config.light_model),
        ai_base_url: non_empty(&cli.ai_base_url).or_else(|| file_config.ai_base_url.clone()),
        temperature: cli.temperature.unwrap_or(file_config.temperature),
        debug: cli.debug.unwrap_or(file_config.debug),
    }
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `./config.toml` or `~/.quill.toml`.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_file_path(),
        }
    }

    /// Creates a config manager for an explicit path.
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Reads and validates the file.
    pub fn load(&self) -> Result<ConfigFile, AppError> {
        let load_error = |reason: String| AppError::ConfigLoad {
            path: self.config_path.clone(),
            reason,
        };

        let contents = fs::read_to_string(&self.config_path).map_err(|e| load_error(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| load_error(e.to_string().trim().to_string()))
    }

    /// Loads the file, falling back to defaults.
    ///
    /// A missing file yields defaults silently. A file that cannot be read or
    /// fails validation yields defaults with a warning on stderr; a broken
    /// config file never aborts a command.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return ConfigFile::default();
        }

        match self.load() {
            Ok(config) => {
                tracing::debug!(path = %self.config_path.display(), "loaded config file");
                config
            }
            Err(err) => {
                tracing::debug!(error = %err, "config load failed");
                eprintln!("{} {err}", Style::warning("Warning:"));
                eprintln!("{}", Style::warning("Using default configuration."));
                ConfigFile::default()
            }
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads the resolved config file, falling back to defaults on any failure.
pub fn load_config_file() -> ConfigFile {
    ConfigManager::new().load_or_default()
}

pub const EXAMPLE_CONFIG: &str = r#"# Example configuration file for quill
# Place it at ./config.toml or ~/.quill.toml and adjust as needed

# AI Provider configuration
ai_provider = "OpenAI"  # Options: OpenAI, Anthropic, Google, Groq, XAI, Mistral, OpenRouter, Deepseek, Ollama, LlamaCpp, Bedrock
model = ""  # Leave empty to use default model for provider
light_model = false  # Use lighter/faster model variant
ai_base_url = ""  # Custom base URL for OpenAI-compatible providers
temperature = 0.5  # Response creativity (0.0-2.0)
debug = false  # Enable debug output
"#;

/// Writes [`EXAMPLE_CONFIG`] to `path` unless a file is already there.
///
/// Returns `true` if the file was created.
pub fn create_example_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    atomic_write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(true)
}
