use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, SummaryRepository, UploadRepository};
use crate::domain::{SummaryRecord, UploadRecord};

fn lock_poisoned() -> RepositoryError {
    RepositoryError::QueryFailed("in-memory store lock poisoned".to_string())
}

fn page<T: Clone>(mut items: Vec<T>, limit: i64, skip: i64) -> Vec<T> {
    let skip = skip.max(0) as usize;
    let limit = limit.max(0) as usize;
    if skip >= items.len() {
        return Vec::new();
    }
    items.drain(..skip);
    items.truncate(limit);
    items
}

/// Process-local upload metadata, used for `database.provider = "memory"`.
#[derive(Default)]
pub struct InMemoryUploadRepository {
    uploads: RwLock<HashMap<String, UploadRecord>>,
}

impl InMemoryUploadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UploadRepository for InMemoryUploadRepository {
    async fn create(&self, upload: &UploadRecord) -> Result<(), RepositoryError> {
        let mut uploads = self.uploads.write().map_err(|_| lock_poisoned())?;
        if uploads.contains_key(&upload.filename) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "upload already exists: {}",
                upload.filename
            )));
        }
        uploads.insert(upload.filename.clone(), upload.clone());
        Ok(())
    }

    async fn get_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<UploadRecord>, RepositoryError> {
        let uploads = self.uploads.read().map_err(|_| lock_poisoned())?;
        Ok(uploads.get(filename).cloned())
    }

    async fn list(&self, limit: i64, skip: i64) -> Result<Vec<UploadRecord>, RepositoryError> {
        let uploads = self.uploads.read().map_err(|_| lock_poisoned())?;
        let mut all: Vec<UploadRecord> = uploads.values().cloned().collect();
        all.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(page(all, limit, skip))
    }

    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError> {
        let mut uploads = self.uploads.write().map_err(|_| lock_poisoned())?;
        Ok(uploads.remove(filename).is_some())
    }
}

/// Process-local summary cache with the same uniqueness guarantee as the
/// Postgres table.
#[derive(Default)]
pub struct InMemorySummaryRepository {
    summaries: RwLock<HashMap<String, SummaryRecord>>,
}

impl InMemorySummaryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn find_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<SummaryRecord>, RepositoryError> {
        let summaries = self.summaries.read().map_err(|_| lock_poisoned())?;
        Ok(summaries.get(filename).cloned())
    }

    async fn insert_unique(&self, record: &SummaryRecord) -> Result<(), RepositoryError> {
        let mut summaries = self.summaries.write().map_err(|_| lock_poisoned())?;
        if summaries.contains_key(&record.filename) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "summary already exists for {}",
                record.filename
            )));
        }
        summaries.insert(record.filename.clone(), record.clone());
        Ok(())
    }

    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError> {
        let mut summaries = self.summaries.write().map_err(|_| lock_poisoned())?;
        Ok(summaries.remove(filename).is_some())
    }
}
