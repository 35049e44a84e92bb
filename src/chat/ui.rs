//! Chat mode UI components.

use std::io::{self, Write};

use crate::llm::LlmConfig;
use crate::ui::Style;

pub fn print_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Style::title("Starting interactive chat session"))?;
    writeln!(
        out,
        "{}",
        Style::secondary("Type 'quit', 'exit', or press Ctrl+C to end the session")
    )?;
    writeln!(out)
}

pub fn print_goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Style::warning("Goodbye!"))
}

pub fn print_config(out: &mut impl Write, config: &LlmConfig, system_prompt: &str) -> io::Result<()> {
    writeln!(out, "{}", Style::header("Configuration"))?;
    writeln!(
        out,
        "  {}   {}",
        Style::label("provider"),
        Style::value(config.provider)
    )?;
    writeln!(
        out,
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model_name)
    )?;
    writeln!(
        out,
        "  {}   {}",
        Style::label("base url"),
        Style::secondary(config.base_url.as_deref().unwrap_or("default"))
    )?;
    writeln!(
        out,
        "  {}       {}",
        Style::label("temp"),
        Style::value(config.temperature)
    )?;
    writeln!(
        out,
        "  {}     {}",
        Style::label("system"),
        Style::secondary(system_prompt)
    )?;
    writeln!(out)
}

pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Style::header("Available commands"))?;
    writeln!(
        out,
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    )?;
    writeln!(
        out,
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    )?;
    writeln!(
        out,
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode (also: quit, exit, q)")
    )?;
    writeln!(out)
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
