use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StorageLocator;

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(
        &self,
        locator: &StorageLocator,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError>;

    async fn fetch(&self, locator: &StorageLocator) -> Result<Vec<u8>, BlobStoreError>;

    async fn delete(&self, locator: &StorageLocator) -> Result<(), BlobStoreError>;

    async fn head(&self, locator: &StorageLocator) -> Result<u64, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
