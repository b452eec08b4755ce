//! Scripted advice provider for tests and offline runs.
//!
//! Replies are queued up front and handed out in order. Once the queue is
//! empty every call gets [`MockAIProvider::FALLBACK_ADVICE`]. Clones share
//! the queue and the request log, so a test can keep one handle while the
//! handler owns another.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

const MOCK_MODEL: &str = "mock-advisor";

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<CompletionResponse, AIError>>,
    requests: Vec<CompletionRequest>,
}

#[derive(Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl MockAIProvider {
    pub const FALLBACK_ADVICE: &'static str = "Mock advice.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, advice: impl Into<String>) -> Self {
        self.push(Ok(CompletionResponse::new(advice, MOCK_MODEL)))
    }

    /// Queues a reply that stopped at the token limit.
    pub fn with_truncated_response(self, advice: impl Into<String>) -> Self {
        self.push(Ok(CompletionResponse::new(advice, MOCK_MODEL).truncated(true)))
    }

    /// Queues a failure.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(Err(error))
    }

    /// Waits this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.script().requests.len()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.script().requests.clone()
    }

    fn push(self, reply: Result<CompletionResponse, AIError>) -> Self {
        self.script().replies.push_back(reply);
        self
    }

    // A test that panicked while holding the lock must not hide the
    // recorded requests from the next one.
    fn script(&self) -> MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.script().requests.push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.script().replies.pop_front();
        reply.unwrap_or_else(|| Ok(CompletionResponse::new(Self::FALLBACK_ADVICE, MOCK_MODEL)))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}
