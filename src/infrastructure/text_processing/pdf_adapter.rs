use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::ExtractedText;

use super::text_normalizer::normalize_extracted_text;

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Pulls the text layer out of a PDF. Parsing runs on the blocking pool so
/// large documents do not stall other requests.
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Stages the bytes in a temp file and reads every page's text layer.
    /// Blocking: callers run it on the blocking pool.
    fn extract_pages(data: &[u8]) -> Result<Vec<String>, TextExtractorError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let doc = PdfDocument::open(temp_file.path()).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => tracing::debug!(page_index, error = %e, "Skipping unreadable page"),
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(file_size_bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        filename: &str,
    ) -> Result<ExtractedText, TextExtractorError> {
        let data = data.to_vec();

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = pages
            .iter()
            .map(|page| normalize_extracted_text(page))
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        tracing::info!(
            page_count,
            text_length = text.chars().count(),
            "PDF text extraction complete"
        );

        if text.is_empty() {
            return Err(TextExtractorError::NoTextFound(filename.to_string()));
        }

        Ok(ExtractedText::new(text))
    }
}
