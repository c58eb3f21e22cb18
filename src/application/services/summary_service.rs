use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::Instrument;

use super::{AdmissionError, AdmissionPolicy, GenerationError, SingleFlight, SummaryGenerator};
use crate::application::ports::{
    BlobStore, BlobStoreError, LlmClient, SummaryRepository, TextExtractor, UploadRepository,
};
use crate::domain::{SummaryRecord, UploadRecord};

type FlightResult = Result<SummaryOutcome, SummaryError>;

/// Runs the summary pipeline for one upload:
/// admission → cache lookup → extraction → length check → generation → cache write.
///
/// A cache hit never reaches the model backend. Cache-write failures are
/// logged and the freshly generated summary is still returned.
pub struct SummaryService<L>
where
    L: LlmClient + ?Sized,
{
    uploads: Arc<dyn UploadRepository>,
    summaries: Arc<dyn SummaryRepository>,
    blob_store: Arc<dyn BlobStore>,
    text_extractor: Arc<dyn TextExtractor>,
    generator: SummaryGenerator<L>,
    admission: AdmissionPolicy,
    in_flight: Option<SingleFlight<FlightResult>>,
}

impl<L> SummaryService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(
        uploads: Arc<dyn UploadRepository>,
        summaries: Arc<dyn SummaryRepository>,
        blob_store: Arc<dyn BlobStore>,
        text_extractor: Arc<dyn TextExtractor>,
        generator: SummaryGenerator<L>,
        admission: AdmissionPolicy,
    ) -> Self {
        Self {
            uploads,
            summaries,
            blob_store,
            text_extractor,
            generator,
            admission,
            in_flight: Some(SingleFlight::new()),
        }
    }

    /// Lets concurrent requests for the same uncached file each run their own
    /// generation. The unique filename constraint still keeps one record.
    pub fn without_single_flight(mut self) -> Self {
        self.in_flight = None;
        self
    }

    pub fn admission(&self) -> AdmissionPolicy {
        self.admission
    }

    pub async fn summarize(&self, file_url: &str) -> Result<SummaryOutcome, SummaryError> {
        let filename = filename_from_url(file_url)?;
        self.summarize_file(&filename).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn summarize_file(&self, filename: &str) -> Result<SummaryOutcome, SummaryError> {
        let upload = self
            .uploads
            .get_by_filename(filename)
            .await
            .map_err(|e| SummaryError::Repository(e.to_string()))?
            .ok_or_else(|| SummaryError::FileNotFound(filename.to_string()))?;

        if let Err(e) = self.admission.check_file_size(upload.size_bytes) {
            tracing::warn!(
                phase = "admission",
                file_size_bytes = upload.size_bytes,
                "PDF rejected"
            );
            return Err(e.into());
        }

        let cached = self
            .summaries
            .find_by_filename(filename)
            .await
            .map_err(|e| SummaryError::Repository(e.to_string()))?;

        if let Some(record) = cached {
            tracing::info!("Returning cached summary");
            return Ok(SummaryOutcome::from_cache(record));
        }

        match &self.in_flight {
            Some(flights) => {
                flights
                    .run(filename, || self.generate_and_store(&upload).in_current_span())
                    .await
            }
            None => self.generate_and_store(&upload).await,
        }
    }

    async fn generate_and_store(&self, upload: &UploadRecord) -> FlightResult {
        let filename = upload.filename.as_str();

        let data = self
            .blob_store
            .fetch(&upload.storage_locator)
            .await
            .map_err(|e| match e {
                BlobStoreError::NotFound(_) => SummaryError::FileNotFound(filename.to_string()),
                other => SummaryError::Storage(other.to_string()),
            })?;
        let file_size_bytes = data.len() as u64;

        if let Err(e) = self.admission.check_file_size(file_size_bytes) {
            tracing::warn!(phase = "admission", file_size_bytes, "PDF rejected");
            return Err(e.into());
        }

        let text = self
            .text_extractor
            .extract_text(&data, filename)
            .await
            .map_err(|e| {
                tracing::error!(
                    phase = "extraction",
                    error = %e,
                    file_size_bytes,
                    "Text extraction failed"
                );
                SummaryError::Extraction(e.to_string())
            })?;
        let text_length = text.char_len();

        if let Err(e) = self.admission.check_text_length(&text) {
            tracing::warn!(phase = "length_check", text_length, "Document rejected");
            return Err(e.into());
        }

        tracing::info!(file_size_bytes, text_length, "Processing PDF");

        let started = Instant::now();
        let summary = self.generator.generate(&text).await?;
        let processing_time_ms = started.elapsed().as_millis() as u64;

        let record = SummaryRecord::new(
            filename.to_string(),
            summary,
            file_size_bytes,
            text_length as u64,
            Some(processing_time_ms),
        );

        match self.summaries.insert_unique(&record).await {
            Ok(()) => {
                tracing::info!(processing_time_ms, "Summary cached");
                Ok(SummaryOutcome::generated(record))
            }
            Err(e) if e.is_constraint_violation() => {
                tracing::info!("Summary already cached by a concurrent request");
                match self.summaries.find_by_filename(filename).await {
                    Ok(Some(existing)) => Ok(SummaryOutcome::from_cache(existing)),
                    Ok(None) => Ok(SummaryOutcome::generated(record)),
                    Err(lookup_err) => {
                        tracing::warn!(error = %lookup_err, "Failed to read back cached summary");
                        Ok(SummaryOutcome::generated(record))
                    }
                }
            }
            Err(e) => {
                tracing::warn!(phase = "storing", error = %e, "Failed to cache summary");
                Ok(SummaryOutcome::generated(record))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub cached: bool,
    pub processing_time_ms: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl SummaryOutcome {
    fn from_cache(record: SummaryRecord) -> Self {
        Self {
            summary: record.summary_text,
            cached: true,
            processing_time_ms: record.processing_time_ms,
            created_at: Some(record.created_at),
        }
    }

    fn generated(record: SummaryRecord) -> Self {
        Self {
            summary: record.summary_text,
            cached: false,
            processing_time_ms: record.processing_time_ms,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummaryError {
    #[error("File URL is required")]
    MissingFileUrl,
    #[error("Invalid filename")]
    InvalidFilename,
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error(transparent)]
    Admission(#[from] AdmissionError),
    #[error("extraction: {0}")]
    Extraction(String),
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("blob storage: {0}")]
    Storage(String),
    #[error("repository: {0}")]
    Repository(String),
}

/// Takes the last path segment of `file_url` as the upload filename.
pub fn filename_from_url(file_url: &str) -> Result<String, SummaryError> {
    let file_url = file_url.trim();
    if file_url.is_empty() {
        return Err(SummaryError::MissingFileUrl);
    }

    let filename = file_url.rsplit('/').next().unwrap_or_default();
    validate_filename(filename)?;
    Ok(filename.to_string())
}

/// Rejects empty names and anything that could escape the upload directory.
pub fn validate_filename(filename: &str) -> Result<(), SummaryError> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(SummaryError::InvalidFilename);
    }
    Ok(())
}
