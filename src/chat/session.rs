use anyhow::Result;
use async_trait::async_trait;
use futures_util::StreamExt;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::llm::{LlmConfig, ModelClient, stream_ai_response};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Where chat lines come from.
#[async_trait(?Send)]
pub trait LineSource {
    /// Returns the next line, or `None` at end of input or when the user
    /// interrupts the prompt.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Interactive terminal prompt with slash command completion.
pub struct PromptLines {
    render_config: RenderConfig<'static>,
}

impl PromptLines {
    pub fn new() -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightGreen)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for PromptLines {
    fn default() -> Self {
        Self::new()
    }
}

// The terminal prompt runs in raw mode and reports Ctrl+C itself.
#[async_trait(?Send)]
impl LineSource for PromptLines {
    async fn next_line(&mut self) -> Result<Option<String>> {
        let input = Text::new("You")
            .with_render_config(self.render_config)
            .with_autocomplete(SlashCommandCompleter)
            .with_help_message("/help for commands, quit or Ctrl+C to end")
            .prompt();

        match input {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_prompt_cancelled(&e) => {
                println!(); // Clear line before goodbye message
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain lines from a non-interactive reader, e.g. piped stdin.
///
/// Reads asynchronously so an interrupt can pre-empt a pending read.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: AsyncBufRead + Unpin> ReaderLines<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[async_trait(?Send)]
impl<R: AsyncBufRead + Unpin> LineSource for ReaderLines<R> {
    async fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// An interactive chat session.
///
/// Every line is sent as a fresh single-turn exchange under the session's
/// system prompt; the session keeps no history.
pub struct ChatSession<C> {
    client: C,
    config: LlmConfig,
    system_prompt: String,
}

impl<C: ModelClient> ChatSession<C> {
    pub fn new(client: C, config: LlmConfig, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            config,
            system_prompt: system_prompt.into(),
        }
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Runs the read-respond loop until a quit word, end of input, or an
    /// interrupted prompt. Responses are written to `out`.
    pub async fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<()>
    where
        S: LineSource + ?Sized,
        W: Write,
    {
        ui::print_header(out)?;

        while let Some(line) = source.next_line().await? {
            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd, out)? {
                        break;
                    }
                }
                Input::Text(text) => {
                    self.respond(&text, out).await?;
                }
            }
        }

        ui::print_goodbye(out)?;
        Ok(())
    }

    fn handle_command<W: Write>(&self, cmd: SlashCommand, out: &mut W) -> Result<bool> {
        match cmd {
            SlashCommand::Config => ui::print_config(out, &self.config, &self.system_prompt)?,
            SlashCommand::Help => ui::print_help(out)?,
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    async fn respond<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let spinner = Spinner::new("Thinking...");

        let mut stream =
            stream_ai_response(&self.client, &self.config, text, &self.system_prompt).await?;
        let mut started = false;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;

            if !started {
                spinner.stop();
                write!(out, "{} ", Style::speaker("AI:"))?;
                started = true;
            }

            write!(out, "{chunk}")?;
            out.flush()?;
        }

        if !started {
            spinner.stop();
            write!(out, "{} ", Style::speaker("AI:"))?;
        }

        writeln!(out)?;
        writeln!(out)?;
        Ok(())
    }
}
