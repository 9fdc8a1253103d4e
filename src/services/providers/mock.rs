//! Mock provider for tests.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome a [`MockTextProvider`] produces for every call.
#[derive(Clone)]
pub enum MockOutcome {
    /// Succeed with this text as the (single) candidate.
    Text(String),
    /// Fail as if the upstream returned no candidates, with this message.
    NoCandidates(String),
    /// Fail with a transport-level error.
    NetworkError(String),
}

/// Mock text provider that records how often it was invoked, so tests can
/// assert that rejected requests never reach the upstream.
pub struct MockTextProvider {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockTextProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Succeed with the given candidate text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockOutcome::Text(text.into()))
    }

    /// Shared handle to the invocation counter.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            MockOutcome::Text(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockOutcome::NoCandidates(message) => {
                Err(ProviderError::NoCandidates(message.clone()))
            }
            MockOutcome::NetworkError(message) => {
                Err(ProviderError::NetworkError(message.clone()))
            }
        }
    }
}
