mod extracted_text;
mod prompt_request;
mod storage_locator;
mod summary_record;
pub mod summary_sections;
mod upload_record;

pub use extracted_text::ExtractedText;
pub use prompt_request::PromptRequest;
pub use storage_locator::StorageLocator;
pub use summary_record::SummaryRecord;
pub use summary_sections::{SummarySections, extract_section};
pub use upload_record::UploadRecord;
