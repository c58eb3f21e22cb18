use std::path::PathBuf;
use std::sync::Arc;

use super::ObjectBlobStore;
use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProvider, StorageSettings};

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProvider::Local => {
                tracing::info!(path = %settings.local_path, "Using local blob store");
                let store = ObjectBlobStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProvider::S3 => {
                let bucket = settings.s3_bucket.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("s3_bucket required".into())
                })?;
                tracing::info!(bucket, "Using S3 blob store");
                let store = ObjectBlobStore::s3(
                    bucket,
                    settings.s3_region.as_deref(),
                    settings.s3_endpoint.as_deref(),
                )?;
                Ok(Arc::new(store))
            }
        }
    }
}
