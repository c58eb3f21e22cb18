use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StorageLocator;

/// Blob store over any `object_store` backend: a local directory in
/// development, an S3 bucket in production.
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectBlobStore {
    pub fn local(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    /// Credentials come from the standard `AWS_*` environment variables.
    pub fn s3(
        bucket: &str,
        region: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<Self, BlobStoreError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        if let Some(region) = region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }
        let s3 = builder
            .build()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(s3),
        })
    }

    pub fn from_store(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }
}

fn object_path(locator: &StorageLocator) -> ObjectPath {
    ObjectPath::from(locator.as_str())
}

fn map_read_error(error: object_store::Error, locator: &StorageLocator) -> BlobStoreError {
    match error {
        object_store::Error::NotFound { .. } => BlobStoreError::NotFound(locator.to_string()),
        other => BlobStoreError::DownloadFailed(other.to_string()),
    }
}

#[async_trait::async_trait]
impl BlobStore for ObjectBlobStore {
    #[tracing::instrument(skip(self, stream), fields(locator = %locator))]
    async fn store(
        &self,
        locator: &StorageLocator,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        // Uploads are capped well below the S3 multipart threshold, so a
        // single put is enough.
        let mut buffer = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        let total_bytes = buffer.len() as u64;

        self.inner
            .put(&object_path(locator), PutPayload::from(buffer.freeze()))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(total_bytes, "Blob stored");
        Ok(total_bytes)
    }

    async fn fetch(&self, locator: &StorageLocator) -> Result<Vec<u8>, BlobStoreError> {
        let result = self
            .inner
            .get(&object_path(locator))
            .await
            .map_err(|e| map_read_error(e, locator))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, locator: &StorageLocator) -> Result<(), BlobStoreError> {
        self.inner
            .delete(&object_path(locator))
            .await
            .map_err(|e| BlobStoreError::DeleteFailed(e.to_string()))
    }

    async fn head(&self, locator: &StorageLocator) -> Result<u64, BlobStoreError> {
        let meta = self
            .inner
            .head(&object_path(locator))
            .await
            .map_err(|e| map_read_error(e, locator))?;
        Ok(meta.size as u64)
    }
}
