use clap::ValueEnum;
use std::fmt;
use std::io::{self, Write};

/// Envelope used when printing a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayFormat {
    /// The response text as is.
    #[default]
    Md,
    /// `{"response": "..."}`, pretty-printed.
    Json,
    /// A `response` header row and one quoted data row.
    Csv,
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md => "md",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Wraps `content` in the envelope for `format`.
///
/// The text itself is never altered, only wrapped.
pub fn render(content: &str, format: DisplayFormat) -> String {
    match format {
        DisplayFormat::Md => content.to_string(),
        DisplayFormat::Json => format!("{:#}", serde_json::json!({ "response": content })),
        DisplayFormat::Csv => format!("response\n{}", csv_field(content)),
    }
}

// RFC 4180: always quoted, embedded quotes doubled.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Prints the rendered response to stdout.
pub fn display_response(content: &str, format: DisplayFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render(content, format))?;
    stdout.flush()
}
