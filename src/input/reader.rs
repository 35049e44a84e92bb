use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::AppError;
use crate::ui::Style;

pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Resolves the prompt text from exactly one source.
    ///
    /// Priority: a non-empty `prompt` flag (used verbatim), then `input_file`
    /// (trimmed), then standard input read to the end (trimmed).
    pub async fn resolve(prompt: Option<&str>, input_file: Option<&Path>) -> Result<String, AppError> {
        if prompt.is_none_or(str::is_empty) && input_file.is_none() && io::stdin().is_terminal() {
            eprintln!(
                "{}",
                Style::warning("Enter your prompt (press Ctrl+D to finish):")
            );
        }
        Self::resolve_from(prompt, input_file, tokio::io::stdin()).await
    }

    /// [`InputReader::resolve`] with an explicit stdin.
    pub async fn resolve_from<R>(
        prompt: Option<&str>,
        input_file: Option<&Path>,
        stdin: R,
    ) -> Result<String, AppError>
    where
        R: AsyncRead + Unpin,
    {
        if let Some(prompt) = prompt.filter(|p| !p.is_empty()) {
            tracing::debug!("using direct prompt");
            return Ok(prompt.to_string());
        }

        let content = if let Some(path) = input_file {
            tracing::debug!(path = %path.display(), "reading prompt from file");
            Self::read_file(path)?
        } else {
            tracing::debug!("reading prompt from stdin");
            Self::read_stdin(stdin).await?
        };

        non_empty(content.trim().to_string())
    }

    /// Reads a whole document (for summarize / analyze-code) without trimming it.
    ///
    /// Fails if the file is missing, too large, or blank.
    pub fn read_document(path: &Path) -> Result<String, AppError> {
        let content = Self::read_file(path)?;
        if content.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(content)
    }

    fn read_file(path: &Path) -> Result<String, AppError> {
        let metadata = fs::metadata(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::MissingInputSource(path.to_path_buf()),
            _ => AppError::ReadInput(err),
        })?;

        if metadata.is_dir() {
            return Err(AppError::MissingInputSource(path.to_path_buf()));
        }

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            return Err(AppError::InputTooLarge { size });
        }

        Ok(fs::read_to_string(path)?)
    }

    async fn read_stdin<R>(stdin: R) -> Result<String, AppError>
    where
        R: AsyncRead + Unpin,
    {
        let mut buffer = Vec::new();
        stdin
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .await?;

        if buffer.len() > MAX_INPUT_SIZE {
            return Err(AppError::InputTooLarge { size: buffer.len() });
        }

        String::from_utf8(buffer)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8").into())
    }
}

fn non_empty(content: String) -> Result<String, AppError> {
    if content.is_empty() {
        Err(AppError::EmptyInput)
    } else {
        Ok(content)
    }
}
