//! Mock LLM Gateway for testing.
//!
//! Returns queued responses or errors in order and records every call, so
//! tests can run the narrative flow without a live model.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockGateway::new()
//!     .with_response("Here is your summary.")
//!     .with_error(GatewayError::AuthenticationFailed);
//!
//! let first = gateway.generate(&prompt, &options).await?;
//! assert_eq!(first.text, "Here is your summary.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::prompts::PromptPair;
use crate::ports::{GatewayError, GatewayInfo, GatewayResponse, GenerationOptions, LlmGateway};

/// A call recorded by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: PromptPair,
    pub options: GenerationOptions,
}

/// Configurable in-memory gateway.
#[derive(Debug, Clone)]
pub struct MockGateway {
    /// Queued outcomes (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    /// Gateway info to return.
    info: GatewayInfo,
    /// Simulated latency per call.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: GatewayInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.push(Err(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    fn push(&self, outcome: Result<String, GatewayError>) {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(outcome);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_outcome(&self) -> Result<String, GatewayError> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()))
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn generate(
        &self,
        prompt: &PromptPair,
        options: &GenerationOptions,
    ) -> Result<GatewayResponse, GatewayError> {
        self.lock_calls().push(RecordedCall {
            prompt: prompt.clone(),
            options: options.clone(),
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_outcome()
            .map(|text| GatewayResponse::new(text, &options.model))
    }

    fn gateway_info(&self) -> GatewayInfo {
        self.info.clone()
    }
}
