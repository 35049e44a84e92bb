//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.
//!
//! This module provides utilities for parsing SSE streams from chat completion APIs.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::error::LlmError;
use super::exchange::{MessageContent, content_to_text};

/// One `data:` event of a streaming chat completion.
#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamErrorBody>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
struct StreamErrorBody {
    message: String,
}

/// What a single SSE line contributed.
#[derive(Debug, PartialEq, Eq)]
enum SseEvent {
    Content(String),
    Error(String),
    Done,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Bytes are buffered until a full line is available, so multi-byte UTF-8
/// sequences split across network chunks decode correctly. The stream ends
/// at `data: [DONE]`, at the end of the body, or after the first error.
///
/// # Arguments
///
/// * `byte_stream` - A stream of raw bytes from an HTTP response
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, LlmError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(LlmError::Stream(e.to_string()));
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);

            while let Some(line_end) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=line_end).collect();
                let line = String::from_utf8_lossy(&line);

                match parse_sse_line(line.trim()) {
                    Some(SseEvent::Content(content)) => yield Ok(content),
                    Some(SseEvent::Error(message)) => {
                        yield Err(LlmError::Stream(message));
                        return;
                    }
                    Some(SseEvent::Done) => return,
                    None => {}
                }
            }
        }

        // A final event without a trailing newline.
        let rest = String::from_utf8_lossy(&buffer);
        if let Some(SseEvent::Content(content)) = parse_sse_line(rest.trim()) {
            yield Ok(content);
        }
    }
}

/// Parses a single trimmed SSE line.
///
/// Returns `None` for comments, blank lines, non-data fields, malformed JSON,
/// and events without text content.
fn parse_sse_line(line: &str) -> Option<SseEvent> {
    let json_str = line.strip_prefix("data:")?.trim_start();

    if json_str == "[DONE]" {
        return Some(SseEvent::Done);
    }

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    if let Some(error) = response.error {
        return Some(SseEvent::Error(error.message));
    }

    let content: String = response
        .choices
        .into_iter()
        .map(|c| content_to_text(c.delta.content))
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(SseEvent::Content(content))
    }
}
