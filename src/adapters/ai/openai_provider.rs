//! OpenAI chat completions adapter. The default advice provider.
//!
//! The advice prompt becomes a two-message chat: the advisor instructions
//! as the `system` turn and the walkthrough transcript as the `user` turn.
//! One HTTP call per request, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::status_error;
use crate::ports::{
    transport_error, AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo,
};

const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the adapter at an OpenAI-compatible gateway.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::unavailable(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn chat_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatBody<'a> {
        ChatBody {
            model: &self.config.model,
            messages: [
                ChatTurn {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatTurn {
                    role: "user",
                    content: &request.transcript,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Reads the first choice out of a chat completion.
fn into_advice(reply: ChatReply) -> Result<CompletionResponse, AIError> {
    let choice = reply
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("chat completion had no choices"))?;

    match choice.finish_reason.as_deref() {
        Some("content_filter") => Err(AIError::content_filtered("OpenAI content filter")),
        reason => Ok(CompletionResponse::new(
            choice.message.content.unwrap_or_default(),
            reply.model,
        )
        .truncated(reason == Some("length"))),
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        debug!(
            model = %self.config.model,
            session_id = %request.session_id,
            trace_id = %request.trace_id,
            "Requesting advice from OpenAI"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.chat_body(&request))
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| AIError::parse(e.to_string()))?;
        into_advice(reply)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

#[derive(Debug, Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: [ChatTurn<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}
