//! Advice provider adapters.
//!
//! - `OpenAIProvider` - OpenAI chat completions (default)
//! - `AnthropicProvider` - Anthropic Messages API
//! - `MockAIProvider` - scripted replies for tests

mod anthropic_provider;
mod mock_provider;
mod openai_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
pub use mock_provider::MockAIProvider;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Retry-after reported when the provider does not say.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Builds the configured primary provider.
///
/// Returns `Ok(None)` when the primary provider has no API key.
pub fn provider_from_config(config: &AiConfig) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let Some(api_key) = config.primary_api_key() else {
        return Ok(None);
    };

    let provider: Arc<dyn AIProvider> = match config.primary_provider {
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model.clone());
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Anthropic => {
            let mut anthropic = AnthropicConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                anthropic = anthropic.with_model(model.clone());
            }
            Arc::new(AnthropicProvider::new(anthropic)?)
        }
    };
    Ok(Some(provider))
}

/// Maps a non-success HTTP status from either provider onto `AIError`.
pub(crate) fn status_error(status: u16, body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(&body)),
        400 | 404 | 422 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Looks for "try again in N" inside the provider's JSON error message.
fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_owned));

    message
        .as_deref()
        .and_then(|s| s.split_once("try again in "))
        .and_then(|(_, rest)| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
