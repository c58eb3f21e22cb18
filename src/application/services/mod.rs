mod admission;
mod prompts;
mod single_flight;
mod summary_generator;
mod summary_service;

pub use admission::{AdmissionError, AdmissionPolicy, BYTES_PER_MB};
pub use prompts::{SUMMARY_SYSTEM_PROMPT, SUMMARY_USER_PROMPT_TEMPLATE, build_summary_prompt};
pub use single_flight::SingleFlight;
pub use summary_generator::{DelayFn, GenerationError, RetryPolicy, SummaryGenerator, tokio_delay};
pub use summary_service::{
    SummaryError, SummaryOutcome, SummaryService, filename_from_url, validate_filename,
};
