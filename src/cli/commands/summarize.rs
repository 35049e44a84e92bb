use anyhow::{Context, Result};
use std::path::Path;

use super::run_task;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::llm::tasks;
use crate::output::{self, DisplayFormat};
use crate::ui::Style;

pub async fn run_summarize(input_file: &Path, output_file: Option<&Path>) -> Result<()> {
    let text = InputReader::read_document(input_file)?;
    let summary = run_task(tasks::summarize(&text), "Summarizing...").await?;

    match output_file {
        Some(path) => {
            atomic_write(path, &summary)
                .with_context(|| format!("Failed to write summary: {}", path.display()))?;
            eprintln!("{} {}", Style::success("Summary saved to:"), path.display());
        }
        None => output::display_response(&summary, DisplayFormat::Md)?,
    }

    Ok(())
}
