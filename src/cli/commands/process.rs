use anyhow::Result;
use std::io;

use super::{connect, print_stream};
use crate::app::{APP_TITLE, VERSION};
use crate::cli::ProcessArgs;
use crate::config::AppConfig;
use crate::input::InputReader;
use crate::llm::{LlmConfig, PricingDisplay, process_ai_request, stream_ai_response, usage_report};
use crate::output::{self, DisplayFormat};
use crate::ui::{Spinner, Style};

pub async fn run_process(args: ProcessArgs) -> Result<()> {
    if args.version {
        println!("{}", version_line());
        return Ok(());
    }

    tracing::debug!("starting process command");
    let (config, llm_config, client) = connect(&args.overrides())?;

    if config.debug {
        print_configuration(&config, &llm_config, args.pricing, args.display_format);
    }

    let prompt = InputReader::resolve(args.prompt.as_deref(), args.input_file.as_deref()).await?;
    tracing::debug!(chars = prompt.len(), "processing prompt");

    if args.stream {
        eprintln!("{}", Style::secondary("Streaming response..."));
        let stream =
            stream_ai_response(&client, &llm_config, &prompt, &args.system_prompt).await?;
        print_stream(stream, &mut io::stdout()).await?;
    } else {
        let spinner = Spinner::new("Thinking...");
        let completion =
            process_ai_request(&client, &llm_config, &prompt, &args.system_prompt).await;
        spinner.stop();
        let completion = completion?;

        output::display_response(&completion.content, args.display_format)?;

        if let Some(report) = usage_report(completion.usage.as_ref(), args.pricing) {
            eprintln!("{}", Style::secondary(report));
        }
    }

    tracing::debug!("process command completed");
    Ok(())
}

fn version_line() -> String {
    format!("{} version {}", Style::title(APP_TITLE), Style::version(VERSION))
}

fn print_configuration(
    config: &AppConfig,
    llm_config: &LlmConfig,
    pricing: PricingDisplay,
    display_format: DisplayFormat,
) {
    let rows = [
        ("AI Provider", config.ai_provider.to_string()),
        ("Model", llm_config.model_name.clone()),
        ("Light Model", config.light_model.to_string()),
        (
            "Base URL",
            config.ai_base_url.clone().unwrap_or_else(|| "default".to_string()),
        ),
        ("Temperature", config.temperature.to_string()),
        ("Debug", config.debug.to_string()),
        ("Pricing", format!("{pricing:?}").to_lowercase()),
        ("Display Format", display_format.to_string()),
    ];

    eprintln!("{}", Style::header("Configuration"));
    for (label, value) in rows {
        eprintln!("  {} {}", Style::label(format!("{label}:")), Style::value(value));
    }
    eprintln!();
}
