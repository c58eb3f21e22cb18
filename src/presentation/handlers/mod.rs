mod error;
mod files;
mod health;
mod summaries;
mod summarize;
mod uploads;

pub use error::{ErrorResponse, error_response};
pub use files::serve_file_handler;
pub use health::health_handler;
pub use summaries::{delete_summary_handler, get_summary_handler};
pub use summarize::summarize_handler;
pub use uploads::{
    delete_upload_handler, get_upload_handler, list_uploads_handler, upload_handler,
};
