//! Supported LLM providers and their per-provider defaults.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// An LLM provider reachable through an OpenAI-compatible chat endpoint.
///
/// The canonical names (`OpenAI`, `LlamaCpp`, ...) are what the config file
/// and `--ai-provider` accept; lower-case spellings are accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Provider {
    #[default]
    #[serde(rename = "OpenAI", alias = "openai")]
    #[value(name = "OpenAI", alias = "openai")]
    OpenAI,
    #[serde(rename = "Anthropic", alias = "anthropic")]
    #[value(name = "Anthropic", alias = "anthropic")]
    Anthropic,
    #[serde(rename = "Google", alias = "google")]
    #[value(name = "Google", alias = "google")]
    Google,
    #[serde(rename = "Groq", alias = "groq")]
    #[value(name = "Groq", alias = "groq")]
    Groq,
    #[serde(rename = "XAI", alias = "xai")]
    #[value(name = "XAI", alias = "xai")]
    Xai,
    #[serde(rename = "Mistral", alias = "mistral")]
    #[value(name = "Mistral", alias = "mistral")]
    Mistral,
    #[serde(rename = "OpenRouter", alias = "openrouter")]
    #[value(name = "OpenRouter", alias = "openrouter")]
    OpenRouter,
    #[serde(rename = "Deepseek", alias = "deepseek")]
    #[value(name = "Deepseek", alias = "deepseek")]
    Deepseek,
    #[serde(rename = "Ollama", alias = "ollama")]
    #[value(name = "Ollama", alias = "ollama")]
    Ollama,
    #[serde(rename = "LlamaCpp", alias = "llamacpp")]
    #[value(name = "LlamaCpp", alias = "llamacpp")]
    LlamaCpp,
    #[serde(rename = "Bedrock", alias = "bedrock")]
    #[value(name = "Bedrock", alias = "bedrock")]
    Bedrock,
}

/// Providers that run locally or authenticate with ambient credentials.
pub const NO_KEY_PROVIDERS: &[Provider] = &[Provider::Ollama, Provider::LlamaCpp, Provider::Bedrock];

/// Optional bearer token for Bedrock's OpenAI-compatible endpoint.
const BEDROCK_TOKEN_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";

impl Provider {
    /// All providers, in display order.
    pub const ALL: &[Self] = &[
        Self::OpenAI,
        Self::Anthropic,
        Self::Google,
        Self::Groq,
        Self::Xai,
        Self::Mistral,
        Self::OpenRouter,
        Self::Deepseek,
        Self::Ollama,
        Self::LlamaCpp,
        Self::Bedrock,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Google => "Google",
            Self::Groq => "Groq",
            Self::Xai => "XAI",
            Self::Mistral => "Mistral",
            Self::OpenRouter => "OpenRouter",
            Self::Deepseek => "Deepseek",
            Self::Ollama => "Ollama",
            Self::LlamaCpp => "LlamaCpp",
            Self::Bedrock => "Bedrock",
        }
    }

    /// Name of the environment variable holding this provider's API key.
    ///
    /// `None` for providers in [`NO_KEY_PROVIDERS`].
    pub const fn env_key_name(self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
            Self::Google => Some("GOOGLE_API_KEY"),
            Self::Groq => Some("GROQ_API_KEY"),
            Self::Xai => Some("XAI_API_KEY"),
            Self::Mistral => Some("MISTRAL_API_KEY"),
            Self::OpenRouter => Some("OPENROUTER_API_KEY"),
            Self::Deepseek => Some("DEEPSEEK_API_KEY"),
            Self::Ollama | Self::LlamaCpp | Self::Bedrock => None,
        }
    }

    pub fn requires_api_key(self) -> bool {
        !NO_KEY_PROVIDERS.contains(&self)
    }

    pub const fn default_model(self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-4o",
            Self::Anthropic => "claude-sonnet-4-5",
            Self::Google => "gemini-2.5-pro",
            Self::Groq => "llama-3.3-70b-versatile",
            Self::Xai => "grok-4",
            Self::Mistral => "mistral-large-latest",
            Self::OpenRouter => "openai/gpt-4o",
            Self::Deepseek => "deepseek-chat",
            Self::Ollama => "llama3.2",
            Self::LlamaCpp => "default",
            Self::Bedrock => "openai.gpt-oss-120b-1:0",
        }
    }

    /// A cheaper/faster model used with `--light-model`.
    pub const fn light_model(self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-4o-mini",
            Self::Anthropic => "claude-haiku-4-5",
            Self::Google => "gemini-2.5-flash",
            Self::Groq => "llama-3.1-8b-instant",
            Self::Xai => "grok-3-mini",
            Self::Mistral => "mistral-small-latest",
            Self::OpenRouter => "openai/gpt-4o-mini",
            Self::Deepseek => "deepseek-chat",
            Self::Ollama => "llama3.2:1b",
            Self::LlamaCpp => "default",
            Self::Bedrock => "openai.gpt-oss-20b-1:0",
        }
    }

    /// OpenAI-compatible base URL (without the `/chat/completions` suffix).
    pub fn default_base_url(self) -> Cow<'static, str> {
        match self {
            Self::OpenAI => Cow::Borrowed("https://api.openai.com/v1"),
            Self::Anthropic => Cow::Borrowed("https://api.anthropic.com/v1"),
            Self::Google => {
                Cow::Borrowed("https://generativelanguage.googleapis.com/v1beta/openai")
            }
            Self::Groq => Cow::Borrowed("https://api.groq.com/openai/v1"),
            Self::Xai => Cow::Borrowed("https://api.x.ai/v1"),
            Self::Mistral => Cow::Borrowed("https://api.mistral.ai/v1"),
            Self::OpenRouter => Cow::Borrowed("https://openrouter.ai/api/v1"),
            Self::Deepseek => Cow::Borrowed("https://api.deepseek.com/v1"),
            Self::Ollama => Cow::Borrowed("http://localhost:11434/v1"),
            Self::LlamaCpp => Cow::Borrowed("http://127.0.0.1:8080/v1"),
            Self::Bedrock => {
                let region = std::env::var("AWS_REGION")
                    .ok()
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| "us-east-1".to_string());
                Cow::Owned(format!(
                    "https://bedrock-runtime.{region}.amazonaws.com/openai/v1"
                ))
            }
        }
    }

    /// Reads the bearer credential for this provider from the environment.
    ///
    /// Empty values are treated as unset.
    pub fn api_key(self) -> Option<String> {
        let var = self.env_key_name().or(match self {
            Self::Bedrock => Some(BEDROCK_TOKEN_ENV),
            _ => None,
        })?;
        std::env::var(var).ok().filter(|key| !key.is_empty())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
