use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::UploadRecord;

#[async_trait]
pub trait UploadRepository: Send + Sync {
    async fn create(&self, upload: &UploadRecord) -> Result<(), RepositoryError>;

    async fn get_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<UploadRecord>, RepositoryError>;

    /// Newest first.
    async fn list(&self, limit: i64, skip: i64) -> Result<Vec<UploadRecord>, RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError>;
}
