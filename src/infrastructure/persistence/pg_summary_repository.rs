use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, SummaryRepository};
use crate::domain::SummaryRecord;

pub struct PgSummaryRepository {
    pool: PgPool,
}

impl PgSummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    filename: String,
    summary: String,
    file_size: i64,
    text_length: i64,
    processing_time_ms: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<SummaryRow> for SummaryRecord {
    fn from(row: SummaryRow) -> Self {
        SummaryRecord {
            filename: row.filename,
            summary_text: row.summary,
            source_file_size_bytes: row.file_size.max(0) as u64,
            extracted_text_length: row.text_length.max(0) as u64,
            processing_time_ms: row.processing_time_ms.map(|ms| ms.max(0) as u64),
            created_at: row.created_at,
        }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    #[instrument(skip(self))]
    async fn find_by_filename(
        &self,
        filename: &str,
    ) -> Result<Option<SummaryRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT filename, summary, file_size, text_length, processing_time_ms, created_at
            FROM ai_summaries
            WHERE filename = $1
            "#,
        )
        .bind(filename)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(SummaryRecord::from))
    }

    #[instrument(skip(self, record), fields(filename = %record.filename))]
    async fn insert_unique(&self, record: &SummaryRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO ai_summaries (filename, summary, file_size, text_length, processing_time_ms, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.filename)
        .bind(&record.summary_text)
        .bind(record.source_file_size_bytes as i64)
        .bind(record.extracted_text_length as i64)
        .bind(record.processing_time_ms.map(|ms| ms as i64))
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::ConstraintViolation(format!(
                    "summary already exists for {}",
                    record.filename
                ))
            }
            other => query_failed(other),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_filename(&self, filename: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM ai_summaries WHERE filename = $1")
            .bind(filename)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() > 0)
    }
}
