use anyhow::Result;

use super::run_task;
use crate::llm::tasks;
use crate::output::{self, DisplayFormat};

pub async fn run_translate(text: &str, language: &str) -> Result<()> {
    let translation = run_task(tasks::translate(text, language), "Translating...").await?;
    output::display_response(&translation, DisplayFormat::Md)?;
    Ok(())
}
