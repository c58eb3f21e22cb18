mod in_memory_repository;
mod pg_pool;
mod pg_summary_repository;
mod pg_upload_repository;

pub use in_memory_repository::{InMemorySummaryRepository, InMemoryUploadRepository};
pub use pg_pool::{create_pool, run_migrations};
pub use pg_summary_repository::PgSummaryRepository;
pub use pg_upload_repository::PgUploadRepository;
