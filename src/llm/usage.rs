//! Token usage reporting for `--pricing`.

use clap::ValueEnum;
use serde::Deserialize;

/// Token counts reported by the provider for one completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl Usage {
    /// Total tokens, computed from the parts when the provider omits it.
    pub const fn total(&self) -> u64 {
        if self.total_tokens > 0 {
            self.total_tokens
        } else {
            self.prompt_tokens + self.completion_tokens
        }
    }
}

/// How much usage information to print after a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PricingDisplay {
    /// Print nothing.
    #[default]
    None,
    /// Print the total token count (there is no cost table).
    Price,
    /// Print prompt/completion/total token counts.
    Details,
}

/// Formats the usage report for `display`, or `None` when nothing should be shown.
pub fn usage_report(usage: Option<&Usage>, display: PricingDisplay) -> Option<String> {
    if display == PricingDisplay::None {
        return None;
    }

    let Some(usage) = usage else {
        return Some("Usage: not reported by provider".to_string());
    };

    Some(match display {
        PricingDisplay::Details => format!(
            "Usage: {} prompt + {} completion = {} tokens",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total()
        ),
        _ => format!("Usage: {} tokens", usage.total()),
    })
}
