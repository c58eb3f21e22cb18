use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::StorageLocator;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub filename: String,
    pub original_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    #[serde(serialize_with = "serialize_locator")]
    pub storage_locator: StorageLocator,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadRecord {
    /// Builds a record under a freshly generated `<uuid>.pdf` filename. The
    /// generated name is the surrogate key for everything derived from the
    /// upload, including its cached summary.
    pub fn new(original_name: String, size_bytes: u64, mime_type: String, prefix: &str) -> Self {
        let filename = Self::generate_filename();
        let storage_locator = StorageLocator::new(prefix, &filename);
        Self {
            filename,
            original_name,
            size_bytes,
            mime_type,
            storage_locator,
            uploaded_at: Utc::now(),
        }
    }

    pub fn generate_filename() -> String {
        format!("{}.pdf", Uuid::new_v4())
    }

    pub fn file_path(&self) -> String {
        format!("/api/files/{}", self.filename)
    }
}

fn serialize_locator<S>(locator: &StorageLocator, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(locator.as_str())
}
