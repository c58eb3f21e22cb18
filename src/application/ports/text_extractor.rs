use async_trait::async_trait;

use crate::domain::ExtractedText;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<ExtractedText, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text content found in {0}")]
    NoTextFound(String),
}
