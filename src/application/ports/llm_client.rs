use async_trait::async_trait;

use crate::domain::PromptRequest;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &PromptRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
