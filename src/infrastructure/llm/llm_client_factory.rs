use std::sync::Arc;

use super::{MockLlmClient, OpenAiClient};
use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    match settings.provider {
        LlmProvider::OpenAi => Ok(Arc::new(OpenAiClient::new(
            settings
                .base_url
                .clone()
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            settings.api_key.clone(),
            settings.chat_model.clone(),
            false,
        ))),
        LlmProvider::LmStudio => {
            let base_url = settings.base_url.clone().ok_or_else(|| {
                LlmClientError::Configuration("base_url required for lmstudio provider".into())
            })?;
            Ok(Arc::new(OpenAiClient::new(
                base_url,
                settings.api_key.clone(),
                settings.chat_model.clone(),
                false,
            )))
        }
        LlmProvider::Azure => {
            let endpoint = settings.azure_endpoint.as_ref().ok_or_else(|| {
                LlmClientError::Configuration("azure_endpoint required for azure provider".into())
            })?;
            let base_url = format!(
                "{}/openai/deployments/{}",
                endpoint.trim_end_matches('/'),
                settings.chat_model
            );
            Ok(Arc::new(OpenAiClient::new(
                base_url,
                settings.api_key.clone(),
                settings.chat_model.clone(),
                true,
            )))
        }
        LlmProvider::Mock => {
            tracing::warn!("Using mock LLM client; summaries are canned");
            Ok(Arc::new(MockLlmClient::new()))
        }
    }
}
