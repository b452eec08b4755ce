//! Anthropic Messages API adapter.
//!
//! The advisor instructions go in the top-level `system` field and the
//! walkthrough transcript is the only message.

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

const ANTHROPIC_DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: ANTHROPIC_DEFAULT_MODEL.to_string(),
            base_url: ANTHROPIC_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::unavailable(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn messages_body<'a>(&'a self, request: &'a CompletionRequest) -> MessagesBody<'a> {
        MessagesBody {
            model: &self.config.model,
            system: &request.system_prompt,
            messages: [UserTurn {
                role: "user",
                content: &request.transcript,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Joins the text blocks of a Messages reply.
fn into_advice(reply: MessagesReply) -> CompletionResponse {
    let text: String = reply
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();

    CompletionResponse::new(text, reply.model)
        .truncated(reply.stop_reason.as_deref() == Some("max_tokens"))
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        debug!(
            model = %self.config.model,
            session_id = %request.session_id,
            trace_id = %request.trace_id,
            "Requesting advice from Anthropic"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", self.config.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.messages_body(&request))
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        let reply: MessagesReply = response
            .json()
            .await
            .map_err(|e| AIError::parse(e.to_string()))?;
        Ok(into_advice(reply))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("anthropic", &self.config.model)
    }
}

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesReply {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new(AnthropicConfig::new("sk-ant-test")).unwrap()
    }

    #[test]
    fn instructions_go_in_the_system_field() {
        let request = CompletionRequest::new(SessionId::new(), "advisor", "Risks: weather");

        let json = serde_json::to_value(provider().messages_body(&request)).unwrap();

        assert_eq!(json["system"], "advisor");
        assert_eq!(json["messages"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Risks: weather");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn text_blocks_are_joined_and_other_blocks_skipped() {
        let reply: MessagesReply = serde_json::from_str(
            r#"{
                "model": "claude-sonnet-4-20250514",
                "content": [
                    {"type": "text", "text": "Stress-test "},
                    {"type": "tool_use", "id": "x"},
                    {"type": "text", "text": "the schedule."}
                ],
                "stop_reason": "end_turn"
            }"#,
        )
        .unwrap();

        let advice = into_advice(reply);

        assert_eq!(advice.content, "Stress-test the schedule.");
        assert!(!advice.truncated);
    }

    #[test]
    fn max_tokens_stop_marks_advice_truncated() {
        let reply: MessagesReply = serde_json::from_str(
            r#"{"model":"m","content":[{"type":"text","text":"Stress"}],"stop_reason":"max_tokens"}"#,
        )
        .unwrap();

        assert!(into_advice(reply).truncated);
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let config = AnthropicConfig::new("k").with_base_url("http://localhost:9000/");
        let provider = AnthropicProvider::new(config).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9000/v1/messages");
    }

    #[test]
    fn provider_info_reports_configured_model() {
        let info = provider().provider_info();
        assert_eq!(info, ProviderInfo::new("anthropic", ANTHROPIC_DEFAULT_MODEL));
    }
}
