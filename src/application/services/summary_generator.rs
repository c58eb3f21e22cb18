use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use super::prompts::build_summary_prompt;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ExtractedText;

/// Waits between rate-limited attempts. Injected so tests can run without
/// real timers.
pub type DelayFn = Arc<dyn Fn(Duration) -> BoxFuture<'static, ()> + Send + Sync>;

pub fn tokio_delay() -> DelayFn {
    Arc::new(|duration| Box::pin(tokio::time::sleep(duration)))
}

/// Fixed-delay retry applied to rate-limit responses only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(21_000),
        }
    }
}

pub struct SummaryGenerator<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    retry_policy: RetryPolicy,
    max_tokens: usize,
    temperature: f32,
    delay: DelayFn,
}

impl<L> SummaryGenerator<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(
        llm_client: Arc<L>,
        retry_policy: RetryPolicy,
        max_tokens: usize,
        temperature: f32,
    ) -> Self {
        Self {
            llm_client,
            retry_policy,
            max_tokens,
            temperature,
            delay: tokio_delay(),
        }
    }

    pub fn with_delay(mut self, delay: DelayFn) -> Self {
        self.delay = delay;
        self
    }

    /// Requests a markdown summary of `text`.
    ///
    /// A rate-limit response is retried up to `max_retries` times with the
    /// fixed policy delay between attempts. Every other backend failure is
    /// returned on the first occurrence.
    #[tracing::instrument(skip(self, text), fields(text_length = text.char_len()))]
    pub async fn generate(&self, text: &ExtractedText) -> Result<String, GenerationError> {
        let request = build_summary_prompt(text.as_str(), self.max_tokens, self.temperature);
        let max_retries = self.retry_policy.max_retries;
        let mut retries: u32 = 0;

        loop {
            match self.llm_client.complete(&request).await {
                Ok(content) if content.trim().is_empty() => {
                    tracing::warn!(attempt = retries + 1, "Model returned an empty summary");
                    return Err(GenerationError::EmptyResponse);
                }
                Ok(content) => {
                    tracing::debug!(
                        attempt = retries + 1,
                        summary_length = content.len(),
                        "Summary generated"
                    );
                    return Ok(content);
                }
                Err(LlmClientError::RateLimited) if retries < max_retries => {
                    retries += 1;
                    tracing::warn!(
                        attempt = retries,
                        max_retries,
                        delay_ms = self.retry_policy.delay.as_millis() as u64,
                        "Rate limit hit, retrying"
                    );
                    (self.delay)(self.retry_policy.delay).await;
                }
                Err(LlmClientError::RateLimited) => {
                    tracing::error!(attempts = retries + 1, "Rate limit retries exhausted");
                    return Err(GenerationError::RateLimitExhausted {
                        attempts: retries + 1,
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "Summary generation failed");
                    return Err(GenerationError::Backend(e.to_string()));
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("rate limited after {attempts} attempts")]
    RateLimitExhausted { attempts: u32 },
    #[error("model backend: {0}")]
    Backend(String),
    #[error("model returned an empty response")]
    EmptyResponse,
}
