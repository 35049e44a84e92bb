use anyhow::Result;
use std::path::Path;

use super::run_task;
use crate::input::InputReader;
use crate::llm::tasks;
use crate::output::{self, DisplayFormat};

pub async fn run_analyze_code(input_file: &Path) -> Result<()> {
    let code = InputReader::read_document(input_file)?;
    let analysis = run_task(tasks::analyze_code(&code), "Analyzing...").await?;
    output::display_response(&analysis, DisplayFormat::Md)?;
    Ok(())
}
