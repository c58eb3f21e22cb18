mod blob_store;
mod llm_client;
mod repository_error;
mod summary_repository;
mod text_extractor;
mod upload_repository;

pub use blob_store::{BlobStore, BlobStoreError};
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use summary_repository::SummaryRepository;
pub use text_extractor::{TextExtractor, TextExtractorError};
pub use upload_repository::UploadRepository;
