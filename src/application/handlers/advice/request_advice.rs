//! RequestAdviceHandler - the one-shot AI advice request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use crate::config::AiConfig;
use crate::domain::advice::{
    advice_user_message, AdviceText, GateError, ADVICE_MAX_TOKENS, ADVICE_SYSTEM_PROMPT,
    ADVICE_TEMPERATURE,
};
use crate::domain::session::DecisionSession;
use crate::ports::{AIError, AIProvider, CompletionRequest};

/// Handler that sends the walkthrough transcript to the advice provider
/// through the session's gate.
///
/// Holds no provider when no API key is configured; the request then fails
/// as a service error and the gate stays unused.
pub struct RequestAdviceHandler {
    provider: Option<Arc<dyn AIProvider>>,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl RequestAdviceHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
            max_tokens: ADVICE_MAX_TOKENS,
            temperature: ADVICE_TEMPERATURE,
            timeout: Duration::from_secs(60),
        }
    }

    /// Handler without a provider.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            max_tokens: ADVICE_MAX_TOKENS,
            temperature: ADVICE_TEMPERATURE,
            timeout: Duration::from_secs(60),
        }
    }

    /// Handler with generation settings and timeout taken from configuration.
    pub fn from_config(config: &AiConfig, provider: Option<Arc<dyn AIProvider>>) -> Self {
        let handler = match provider {
            Some(provider) => Self::new(provider),
            None => Self::unconfigured(),
        };
        handler
            .with_generation(config.max_tokens, config.temperature)
            .with_timeout(config.timeout())
    }

    /// Overrides the generation parameters.
    pub fn with_generation(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    /// Sets the upper bound on one provider call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Requests advice for the session.
    ///
    /// # Errors
    ///
    /// - `AlreadyRequested` once advice was delivered in this session
    /// - `IncompleteInput` while any walkthrough field is blank
    /// - `ServiceError` when the provider fails; the gate stays unused
    pub async fn handle(&self, session: &mut DecisionSession) -> Result<AdviceText, GateError> {
        let session_id = *session.id();
        let complete = session.answers().all_fields_non_empty();
        let request = self.build_request(session);

        let outcome = session
            .gate_mut()
            .request_advice(complete, || self.invoke(request))
            .await;

        match outcome {
            Ok(advice) => {
                info!(session_id = %session_id, chars = advice.as_str().len(), "Advice received");
                session.store_advice(advice.clone());
                Ok(advice)
            }
            Err(GateError::ServiceError(err)) => {
                error!(
                    session_id = %session_id,
                    error = %err,
                    transient = err.is_transient(),
                    "Advice request failed"
                );
                Err(GateError::ServiceError(err))
            }
            Err(rejected) => {
                warn!(session_id = %session_id, code = %rejected.code(), "Advice request refused");
                Err(rejected)
            }
        }
    }

    fn build_request(&self, session: &DecisionSession) -> CompletionRequest {
        CompletionRequest::new(
            *session.id(),
            ADVICE_SYSTEM_PROMPT,
            advice_user_message(session.answers()),
        )
        .with_generation(self.max_tokens, self.temperature)
    }

    async fn invoke(&self, request: CompletionRequest) -> Result<String, AIError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AIError::not_configured("no API key set for the advice provider"))?;

        let response = tokio::time::timeout(self.timeout, provider.complete(request))
            .await
            .map_err(|_| AIError::timed_out(self.timeout))??;

        if response.content.trim().is_empty() {
            return Err(AIError::parse("provider returned empty advice"));
        }
        if response.truncated {
            warn!(
                model = %response.model,
                max_tokens = self.max_tokens,
                "Advice cut off at the token limit"
            );
        }

        Ok(response.content)
    }
}
