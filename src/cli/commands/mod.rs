//! Subcommand implementations.

use anyhow::Result;
use futures_util::StreamExt;
use std::io::Write;

use crate::config::{AppConfig, CliOverrides, load_config_file, merge_config, validate_environment};
use crate::llm::tasks::TaskPrompt;
use crate::llm::{ChatClient, LlmConfig, ResponseStream, process_ai_request};
use crate::output;
use crate::ui::Spinner;

use super::Command;

/// Code review command handler.
pub mod analyze_code;

/// Chat mode command handler.
pub mod chat;

/// Config file command handler.
pub mod config;

/// One-shot prompt command handler.
pub mod process;

/// Summarize command handler.
pub mod summarize;

/// Translate command handler.
pub mod translate;

/// Runs the parsed command to completion.
pub async fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Process(args) => process::run_process(args).await,
        Command::Chat(args) => chat::run_chat(args).await,
        Command::Config { create, show } => config::run_config(create, show),
        Command::Summarize { input_file, output } => {
            summarize::run_summarize(&input_file, output.as_deref()).await
        }
        Command::Translate { text, language } => translate::run_translate(&text, &language).await,
        Command::AnalyzeCode { input_file } => analyze_code::run_analyze_code(&input_file).await,
    }
}

/// Loads the config file and applies CLI overrides over it.
pub(crate) fn resolve_config(overrides: &CliOverrides) -> AppConfig {
    let config = merge_config(&load_config_file(), overrides);
    output::set_debug(config.debug);
    config
}

/// Resolves config, checks credentials, and builds the provider client.
pub(crate) fn connect(overrides: &CliOverrides) -> Result<(AppConfig, LlmConfig, ChatClient)> {
    let config = resolve_config(overrides);
    validate_environment(config.ai_provider)?;

    let llm_config = LlmConfig::from_app_config(&config);
    let client = ChatClient::new(&llm_config)?;
    Ok((config, llm_config, client))
}

/// Runs a built-in task with the config file settings and returns the answer.
pub(crate) async fn run_task(task: TaskPrompt, status: &str) -> Result<String> {
    let (_, llm_config, client) = connect(&CliOverrides::default())?;

    let spinner = Spinner::new(status);
    let completion = process_ai_request(&client, &llm_config, &task.user, &task.system).await;
    spinner.stop();

    Ok(completion?.content)
}

/// Writes fragments to `out` as they arrive and returns the joined text.
pub(crate) async fn print_stream(mut stream: ResponseStream, out: &mut impl Write) -> Result<String> {
    let mut full_response = String::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        write!(out, "{chunk}")?;
        out.flush()?;
        full_response.push_str(&chunk);
    }

    writeln!(out)?;
    Ok(full_response)
}
