//! Advice provider port.
//!
//! A decision session makes at most one successful call through this port:
//! the fixed advisor system prompt plus the walkthrough transcript, sent
//! with fixed generation settings. Adapters turn that into a vendor HTTP
//! call and map vendor failures onto [`AIError`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::advice::{ADVICE_MAX_TOKENS, ADVICE_TEMPERATURE};
use crate::domain::foundation::SessionId;

/// Text generation backend for the advice request.
///
/// Implementations make a single attempt per call. Retrying is the user's
/// decision, taken by asking for advice again while the gate is unused.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Sends the advice prompt and returns the generated text.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Vendor and model, logged at startup.
    fn provider_info(&self) -> ProviderInfo;
}

/// The advice prompt for one session.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub session_id: SessionId,
    /// Ties adapter log lines to the handler's.
    pub trace_id: String,
    pub system_prompt: String,
    /// The walkthrough transcript, sent as the single user turn.
    pub transcript: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Prompt with the advice flow's default generation settings.
    pub fn new(
        session_id: SessionId,
        system_prompt: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            trace_id: Uuid::new_v4().to_string(),
            system_prompt: system_prompt.into(),
            transcript: transcript.into(),
            max_tokens: ADVICE_MAX_TOKENS,
            temperature: ADVICE_TEMPERATURE,
        }
    }

    pub fn with_generation(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

/// Generated advice as the vendor returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    /// Model that actually answered.
    pub model: String,
    /// Generation stopped at `max_tokens`.
    pub truncated: bool,
}

impl CompletionResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
            truncated: false,
        }
    }

    pub fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: &'static str, model: impl Into<String>) -> Self {
        Self {
            name,
            model: model.into(),
        }
    }
}

/// Failures of the advice call. All of them leave the advice gate unused.
#[derive(Debug, Error)]
pub enum AIError {
    #[error("advice provider is rate limiting requests; try again in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("advice provider withheld the response: {reason}")]
    ContentFiltered { reason: String },

    #[error("advice provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("advice provider not configured: {0}")]
    NotConfigured(String),

    #[error("advice provider rejected the API key")]
    AuthenticationFailed,

    #[error("could not reach the advice provider: {0}")]
    Network(String),

    #[error("unreadable advice response: {0}")]
    Parse(String),

    #[error("advice provider rejected the request: {0}")]
    InvalidRequest(String),

    #[error("no advice within {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Timeout reported in whole seconds, rounded up so a sub-second limit
    /// never reads as zero.
    pub fn timed_out(after: Duration) -> Self {
        let secs = after.as_secs() + u64::from(after.subsec_nanos() > 0);
        Self::Timeout {
            timeout_secs: u32::try_from(secs).unwrap_or(u32::MAX).max(1),
        }
    }

    /// Whether asking again later might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}

/// Maps a reqwest send failure onto `AIError`.
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::timed_out(timeout)
    } else if err.is_connect() {
        AIError::network(format!("connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}
