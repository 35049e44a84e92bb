mod client;
mod error;
mod exchange;
mod provider;
mod request;
mod sse_parser;
pub mod tasks;
mod usage;

pub use client::{ChatClient, ChunkStream, Completion, ModelClient};
pub use error::LlmError;
pub use exchange::{Exchange, Message, MessageContent, Role};
pub use provider::{NO_KEY_PROVIDERS, Provider};
pub use request::{
    DEFAULT_SYSTEM_PROMPT, LlmConfig, ResponseStream, model_name, process_ai_request,
    stream_ai_response,
};
pub use usage::{PricingDisplay, Usage, usage_report};

#[cfg(test)]
pub(crate) use request::testing;
