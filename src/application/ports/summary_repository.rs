use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::SummaryRecord;

/// Backing store of the summary cache. `filename` is unique: inserting a
/// second record for the same filename fails with
/// [`RepositoryError::ConstraintViolation`] and leaves the first untouched.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn find_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<SummaryRecord>, RepositoryError>;

    async fn insert_unique(&self, record: &SummaryRecord) -> Result<(), RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError>;
}
