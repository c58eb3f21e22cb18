use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cached AI summary for one upload. Created once per filename and never
/// updated; removed only together with its source upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub filename: String,
    #[serde(rename = "summary")]
    pub summary_text: String,
    #[serde(rename = "fileSize")]
    pub source_file_size_bytes: u64,
    #[serde(rename = "textLength")]
    pub extracted_text_length: u64,
    #[serde(rename = "processingTime")]
    pub processing_time_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    pub fn new(
        filename: String,
        summary_text: String,
        source_file_size_bytes: u64,
        extracted_text_length: u64,
        processing_time_ms: Option<u64>,
    ) -> Self {
        Self {
            filename,
            summary_text,
            source_file_size_bytes,
            extracted_text_length,
            processing_time_ms,
            created_at: Utc::now(),
        }
    }
}
