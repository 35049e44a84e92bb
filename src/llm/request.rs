//! Request orchestration: builds the exchange, calls the model client, and
//! normalizes failures.

use futures_util::{Stream, StreamExt};
use std::pin::Pin;

use super::client::{Completion, ModelClient};
use super::error::LlmError;
use super::exchange::Exchange;
use super::provider::Provider;
use crate::config::{AppConfig, Temperature};
use crate::error::AppError;
use crate::ui::Style;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Response fragments as seen by the command layer.
pub type ResponseStream = Pin<Box<dyn Stream<Item = Result<String, AppError>> + Send>>;

/// Everything needed to talk to a model, resolved from [`AppConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model_name: String,
    pub temperature: Temperature,
    pub base_url: Option<String>,
    pub debug: bool,
}

impl LlmConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        let model_name = model_name(config.ai_provider, config.model.as_deref(), config.light_model);
        tracing::debug!(provider = %config.ai_provider, model = %model_name, "creating LLM config");

        Self {
            provider: config.ai_provider,
            model_name,
            temperature: config.temperature,
            base_url: config.ai_base_url.clone(),
            debug: config.debug,
        }
    }
}

/// Picks the model: an explicit name wins, then the provider's light model
/// when requested, then the provider's default.
pub fn model_name(provider: Provider, model: Option<&str>, light_model: bool) -> String {
    match model {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if light_model => provider.light_model().to_string(),
        _ => provider.default_model().to_string(),
    }
}

fn build_exchange(config: &LlmConfig, prompt: &str, system_prompt: &str) -> Exchange {
    let exchange = Exchange::new(system_prompt, prompt);
    if config.debug {
        print_debug_block("AI Prompt", &exchange_json(&exchange));
    }
    exchange
}

fn exchange_json(exchange: &Exchange) -> String {
    serde_json::to_string_pretty(&exchange.messages()).unwrap_or_default()
}

fn print_debug_block(title: &str, body: &str) {
    eprintln!("{}", Style::header(title));
    eprintln!("{body}");
    eprintln!();
}

fn request_failure(provider: Provider, model: &str, source: LlmError) -> AppError {
    tracing::error!(%provider, model, error = %source, "AI request failed");
    AppError::RequestFailure {
        provider,
        model: model.to_string(),
        source,
    }
}

/// Sends `prompt` with `system_prompt` and waits for the complete answer.
pub async fn process_ai_request<C>(
    client: &C,
    config: &LlmConfig,
    prompt: &str,
    system_prompt: &str,
) -> Result<Completion, AppError>
where
    C: ModelClient + ?Sized,
{
    let exchange = build_exchange(config, prompt, system_prompt);
    tracing::debug!(model = %config.model_name, "processing AI request");

    let completion = client
        .invoke(&exchange)
        .await
        .map_err(|e| request_failure(config.provider, &config.model_name, e))?;

    if config.debug {
        print_debug_block("AI Response", &completion.content);
    }
    tracing::debug!(chars = completion.content.len(), "AI request processed");

    Ok(completion)
}

/// Sends `prompt` with `system_prompt` and yields non-empty fragments as they arrive.
///
/// The first failure is yielded as a [`AppError::RequestFailure`] and ends the stream.
pub async fn stream_ai_response<C>(
    client: &C,
    config: &LlmConfig,
    prompt: &str,
    system_prompt: &str,
) -> Result<ResponseStream, AppError>
where
    C: ModelClient + ?Sized,
{
    let exchange = build_exchange(config, prompt, system_prompt);
    tracing::debug!(model = %config.model_name, "starting streaming AI request");

    let provider = config.provider;
    let model = config.model_name.clone();

    let mut inner = client
        .stream(&exchange)
        .await
        .map_err(|e| request_failure(provider, &model, e))?;

    let stream = async_stream::stream! {
        while let Some(item) = inner.next().await {
            match item {
                Ok(chunk) if chunk.is_empty() => {}
                Ok(chunk) => yield Ok(chunk),
                Err(e) => {
                    yield Err(request_failure(provider, &model, e));
                    return;
                }
            }
        }
    };

    Ok(Box::pin(stream))
}
