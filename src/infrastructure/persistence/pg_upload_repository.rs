use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, UploadRepository};
use crate::domain::{StorageLocator, UploadRecord};

pub struct PgUploadRepository {
    pool: PgPool,
}

impl PgUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UploadRow {
    filename: String,
    original_name: String,
    size_bytes: i64,
    mime_type: String,
    storage_locator: String,
    uploaded_at: DateTime<Utc>,
}

impl From<UploadRow> for UploadRecord {
    fn from(row: UploadRow) -> Self {
        UploadRecord {
            filename: row.filename,
            original_name: row.original_name,
            size_bytes: row.size_bytes.max(0) as u64,
            mime_type: row.mime_type,
            storage_locator: StorageLocator::from_raw(row.storage_locator),
            uploaded_at: row.uploaded_at,
        }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

#[async_trait]
impl UploadRepository for PgUploadRepository {
    #[instrument(skip(self, upload), fields(filename = %upload.filename))]
    async fn create(&self, upload: &UploadRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO pdf_uploads (filename, original_name, size_bytes, mime_type, storage_locator, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&upload.filename)
        .bind(&upload.original_name)
        .bind(upload.size_bytes as i64)
        .bind(&upload.mime_type)
        .bind(upload.storage_locator.as_str())
        .bind(upload.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::ConstraintViolation(format!(
                    "upload already exists: {}",
                    upload.filename
                ))
            }
            other => query_failed(other),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<UploadRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UploadRow>(
            r#"
            SELECT filename, original_name, size_bytes, mime_type, storage_locator, uploaded_at
            FROM pdf_uploads
            WHERE filename = $1
            "#,
        )
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(UploadRecord::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, skip: i64) -> Result<Vec<UploadRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, UploadRow>(
            r#"
            SELECT filename, original_name, size_bytes, mime_type, storage_locator, uploaded_at
            FROM pdf_uploads
            ORDER BY uploaded_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(rows.into_iter().map(UploadRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM pdf_uploads WHERE filename = $1")
            .bind(filename)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
