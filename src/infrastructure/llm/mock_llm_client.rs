use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::PromptRequest;

const MOCK_SUMMARY: &str = "## Document Overview
Offline summary produced without contacting a model backend.

## Key Points
- The document was received and its text extracted

## Technical Details
- No model call was made

## Claims & Insights
- None

## Summary
Configure an LLM provider to get real summaries.";

/// Canned backend for local runs without an API key. Counts calls.
#[derive(Default)]
pub struct MockLlmClient {
    calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _request: &PromptRequest) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(MOCK_SUMMARY.to_string())
    }
}
