//! The message pair sent with every request, and response content decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// A system message followed by a user message.
///
/// Built fresh for each request and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    system: Message,
    user: Message,
}

impl Exchange {
    pub fn new(system_prompt: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: Message {
                role: Role::System,
                content: system_prompt.into(),
            },
            user: Message {
                role: Role::User,
                content: prompt.into(),
            },
        }
    }

    /// The messages in wire order: system first, then user.
    pub const fn messages(&self) -> [&Message; 2] {
        [&self.system, &self.user]
    }

    pub fn system_prompt(&self) -> &str {
        &self.system.content
    }

    pub fn prompt(&self) -> &str {
        &self.user.content
    }
}

/// Message content as returned by OpenAI-compatible endpoints.
///
/// Most providers send a plain string; some send an array of typed parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageContent {
    /// Flattens the content into plain text.
    ///
    /// Strings pass through unchanged. Part arrays become the in-order
    /// concatenation of each part's `text`; parts without text (images,
    /// tool calls, ...) contribute nothing.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Parts(parts) => parts.into_iter().filter_map(|part| part.text).collect(),
        }
    }
}

/// Coerces optional content into text; `None` becomes the empty string.
pub fn content_to_text(content: Option<MessageContent>) -> String {
    content.map(MessageContent::into_text).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_order() {
        let exchange = Exchange::new("You are terse.", "Hi");
        let [system, user] = exchange.messages();
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, "You are terse.");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Hi");
    }

    #[test]
    fn test_exchange_serializes_as_chat_messages() {
        let exchange = Exchange::new("sys", "usr");
        let json = serde_json::to_value(exchange.messages()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "usr"}
            ])
        );
    }

    #[test]
    fn test_string_content_passes_through() {
        let content: MessageContent = serde_json::from_str(r#""Hello""#).unwrap();
        assert_eq!(content.into_text(), "Hello");
    }

    #[test]
    fn test_part_content_concatenates_text_parts() {
        let content: MessageContent = serde_json::from_str(
            r#"[
                {"type": "text", "text": "Hel"},
                {"type": "image_url", "image_url": {"url": "http://x"}},
                {"type": "text", "text": "lo"}
            ]"#,
        )
        .unwrap();
        assert_eq!(content.into_text(), "Hello");
    }

    #[test]
    fn test_untyped_parts_still_contribute_text() {
        let content: MessageContent =
            serde_json::from_str(r#"[{"text": "plain"}, {"type": "text"}]"#).unwrap();
        assert_eq!(content.into_text(), "plain");
    }

    #[test]
    fn test_missing_content_is_empty() {
        assert_eq!(content_to_text(None), "");
    }
}
