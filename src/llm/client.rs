use async_trait::async_trait;
use futures_util::Stream;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::pin::Pin;

use super::error::LlmError;
use super::exchange::{Exchange, Message, MessageContent, content_to_text};
use super::request::LlmConfig;
use super::sse_parser::sse_to_text_stream;
use super::usage::Usage;
use crate::app;

/// A lazily pulled, forward-only sequence of response fragments.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// A complete (non-streamed) model answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
    pub usage: Option<Usage>,
}

impl Completion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }
}

/// The capability set the orchestrator needs from a model backend.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends the exchange and waits for the whole answer.
    async fn invoke(&self, exchange: &Exchange) -> Result<Completion, LlmError>;

    /// Sends the exchange and returns the answer as it is generated.
    async fn stream(&self, exchange: &Exchange) -> Result<ChunkStream, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [&'a Message; 2],
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ResponseChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ResponseChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f64,
}

impl ChatClient {
    /// Builds a client for the provider, model and base URL in `config`.
    ///
    /// The API key is read from the provider's environment variable.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(app::user_agent())
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().into_owned());

        Ok(Self {
            client,
            base_url,
            api_key: config.provider.api_key(),
            model: config.model_name.clone(),
            temperature: config.temperature.value(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request(&self, exchange: &Exchange, stream: bool) -> RequestBuilder {
        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: exchange.messages(),
            temperature: self.temperature,
            stream,
        };

        let mut http_request = self.client.post(self.completions_url()).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        http_request
    }

    async fn send(&self, exchange: &Exchange, stream: bool) -> Result<Response, LlmError> {
        let url = self.completions_url();
        tracing::debug!(%url, model = %self.model, stream, "sending chat completion request");

        let response = self
            .build_request(exchange, stream)
            .send()
            .await
            .map_err(|e| LlmError::Http {
                url,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status,
                message: error_message(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ModelClient for ChatClient {
    async fn invoke(&self, exchange: &Exchange) -> Result<Completion, LlmError> {
        let response = self.send(exchange, false).await?;
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Stream(e.to_string()))?;
        parse_completion(&body)
    }

    async fn stream(&self, exchange: &Exchange) -> Result<ChunkStream, LlmError> {
        let response = self.send(exchange, true).await?;
        Ok(Box::pin(sse_to_text_stream(response.bytes_stream())))
    }
}

/// Decodes a non-streamed completion body.
///
/// Multiple choices are concatenated in order; content is flattened with
/// [`MessageContent::into_text`].
fn parse_completion(body: &str) -> Result<Completion, LlmError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    if response.choices.is_empty() {
        return Err(LlmError::Decode("response contained no choices".to_string()));
    }

    let content = response
        .choices
        .into_iter()
        .map(|c| content_to_text(c.message.content))
        .collect();

    Ok(Completion {
        content,
        usage: response.usage,
    })
}

/// Extracts the provider's `error.message`, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| body.trim().to_string(),
        |response| response.error.message,
    )
}
