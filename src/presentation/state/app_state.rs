use std::sync::Arc;

use crate::application::ports::{BlobStore, LlmClient, SummaryRepository, UploadRepository};
use crate::application::services::SummaryService;
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub summary_service: Arc<SummaryService<L>>,
    pub uploads: Arc<dyn UploadRepository>,
    pub summaries: Arc<dyn SummaryRepository>,
    pub blob_store: Arc<dyn BlobStore>,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            summary_service: Arc::clone(&self.summary_service),
            uploads: Arc::clone(&self.uploads),
            summaries: Arc::clone(&self.summaries),
            blob_store: Arc::clone(&self.blob_store),
            settings: self.settings.clone(),
        }
    }
}
