use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CliOverrides, Temperature};
use crate::llm::{DEFAULT_SYSTEM_PROMPT, PricingDisplay, Provider};
use crate::output::DisplayFormat;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Quill - A starter template for AI-powered CLI applications")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a prompt with AI and display the response
    Process(ProcessArgs),
    /// Start an interactive chat session with the AI
    Chat(ChatArgs),
    /// Manage application configuration
    Config {
        /// Create an example configuration file
        #[arg(long)]
        create: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// Summarize text from a file
    Summarize {
        /// File to summarize
        input_file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Translate text to another language
    Translate {
        /// Text to translate
        text: String,

        /// Target language
        language: String,
    },
    /// Analyze code and provide insights
    AnalyzeCode {
        /// Code file to analyze
        input_file: PathBuf,
    },
}

impl Command {
    /// The `--debug` flag as given on the command line, if the command has one.
    pub const fn debug_flag(&self) -> Option<bool> {
        match self {
            Self::Process(args) => args.debug,
            Self::Chat(args) => args.debug,
            _ => None,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ProcessArgs {
    /// Prompt to send to AI (use quotes for multi-word prompts)
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Read prompt from file
    #[arg(short = 'i', long)]
    pub input_file: Option<PathBuf>,

    /// System prompt to use
    #[arg(short = 's', long, default_value = DEFAULT_SYSTEM_PROMPT)]
    pub system_prompt: String,

    /// AI provider to use
    #[arg(short = 'a', long)]
    pub ai_provider: Option<Provider>,

    /// AI model to use (overrides config file)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Use a lighter/faster model variant
    #[arg(
        short = 'l',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub light_model: Option<bool>,

    /// Override the base URL for the AI provider
    #[arg(short = 'b', long)]
    pub ai_base_url: Option<String>,

    /// Temperature for response creativity (0.0-2.0)
    #[arg(short = 't', long)]
    pub temperature: Option<Temperature>,

    /// Show token usage reported by the provider on stderr
    /// (price: total tokens, details: prompt/completion breakdown; no cost table)
    #[arg(long, value_enum, default_value_t = PricingDisplay::None)]
    pub pricing: PricingDisplay,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = DisplayFormat::Md)]
    pub display_format: DisplayFormat,

    /// Stream response in real-time
    #[arg(long)]
    pub stream: bool,

    /// Enable debug mode with verbose output
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub debug: Option<bool>,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl ProcessArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            ai_provider: self.ai_provider,
            model: self.model.clone(),
            light_model: self.light_model,
            ai_base_url: self.ai_base_url.clone(),
            temperature: self.temperature,
            debug: self.debug,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ChatArgs {
    /// System prompt for the chat session
    #[arg(short = 's', long, default_value = DEFAULT_SYSTEM_PROMPT)]
    pub system_prompt: String,

    /// AI provider to use
    #[arg(short = 'a', long)]
    pub ai_provider: Option<Provider>,

    /// AI model to use
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Enable debug mode
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub debug: Option<bool>,
}

impl ChatArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            ai_provider: self.ai_provider,
            model: self.model.clone(),
            debug: self.debug,
            ..CliOverrides::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["quill"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().command
    }

    fn process(args: &[&str]) -> ProcessArgs {
        let mut argv = vec!["process"];
        argv.extend_from_slice(args);
        match parse(&argv) {
            Command::Process(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_process_defaults_leave_overrides_unset() {
        let args = process(&[]);
        assert_eq!(args.overrides(), CliOverrides::default());
        assert_eq!(args.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(args.pricing, PricingDisplay::None);
        assert_eq!(args.display_format, DisplayFormat::Md);
        assert!(!args.stream);
        assert!(!args.version);
    }

    #[test]
    fn test_tri_state_flags() {
        assert_eq!(process(&["--debug"]).debug, Some(true));
        assert_eq!(process(&["--debug=false"]).debug, Some(false));
        assert_eq!(process(&["-l"]).light_model, Some(true));
        assert_eq!(process(&["--light-model=false"]).light_model, Some(false));
    }

    #[test]
    fn test_process_full_flags() {
        let args = process(&[
            "-p", "Hello", "-a", "anthropic", "-m", "claude", "-b", "http://proxy", "-t", "0",
            "--pricing", "details", "-o", "json", "--stream",
        ]);
        let overrides = args.overrides();
        assert_eq!(args.prompt.as_deref(), Some("Hello"));
        assert_eq!(overrides.ai_provider, Some(Provider::Anthropic));
        assert_eq!(overrides.model.as_deref(), Some("claude"));
        assert_eq!(overrides.ai_base_url.as_deref(), Some("http://proxy"));
        assert_eq!(overrides.temperature, Some(Temperature::new(0.0).unwrap()));
        assert_eq!(args.pricing, PricingDisplay::Details);
        assert_eq!(args.display_format, DisplayFormat::Json);
        assert!(args.stream);
    }

    #[test]
    fn test_temperature_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["quill", "process", "-t", "2.5"]).is_err());
        assert!(Args::try_parse_from(["quill", "process", "-t", "warm"]).is_err());
    }

    #[test]
    fn test_chat_overrides() {
        let Command::Chat(args) = parse(&["chat", "-a", "Ollama", "-s", "Be terse", "--debug"])
        else {
            panic!("expected chat");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.ai_provider, Some(Provider::Ollama));
        assert_eq!(overrides.debug, Some(true));
        assert!(overrides.light_model.is_none());
        assert_eq!(args.system_prompt, "Be terse");
    }

    #[test]
    fn test_task_commands() {
        assert!(matches!(
            parse(&["summarize", "doc.txt", "-o", "out.md"]),
            Command::Summarize { output: Some(_), .. }
        ));
        assert!(matches!(
            parse(&["translate", "Hello world", "Spanish"]),
            Command::Translate { .. }
        ));
        assert!(matches!(
            parse(&["analyze-code", "main.rs"]),
            Command::AnalyzeCode { .. }
        ));
        assert!(matches!(
            parse(&["config", "--show"]),
            Command::Config { create: false, show: true }
        ));
    }

    #[test]
    fn test_debug_flag() {
        assert_eq!(parse(&["process", "--debug"]).debug_flag(), Some(true));
        assert_eq!(parse(&["chat"]).debug_flag(), None);
        assert_eq!(parse(&["config"]).debug_flag(), None);
    }
}
