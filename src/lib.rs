//! # quill - AI prompting CLI starter
//!
//! `quill` forwards prompts to a large-language-model provider and prints the
//! response. It is meant as a starting point for AI-powered command-line tools.
//!
//! ## Features
//!
//! - **One-shot prompts**: from a flag, a file, or stdin, rendered as Markdown, JSON, or CSV
//! - **Streaming**: see the response as it arrives
//! - **Interactive mode**: chat-style sessions with `quill chat`
//! - **Built-in tasks**: summarize, translate, and analyze-code
//! - **Many providers**: any OpenAI-compatible endpoint, selected by name
//!
//! ## Quick Start
//!
//! ```bash
//! # Simple prompt
//! quill process -p "Hello, world!"
//!
//! # From stdin, streamed
//! echo "Write a haiku" | quill process --stream
//!
//! # Interactive chat with a local model
//! quill chat -a Ollama
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `./config.toml`, or `~/.quill.toml` when there is
//! no local file:
//!
//! ```toml
//! ai_provider = "Anthropic"
//! model = ""
//! light_model = false
//! temperature = 0.5
//! ```
//!
//! API keys come from the environment, `./.env`, or `~/.quill.env`.

/// Application identity and process initialization.
pub mod app;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management, CLI overrides, and environment checks.
pub mod config;

/// Errors presented by the command layer.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from flags, files, and stdin.
pub mod input;

/// Provider catalogue, client, and request orchestration.
pub mod llm;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration and response rendering.
pub mod output;

/// Config and dotenv file locations.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
