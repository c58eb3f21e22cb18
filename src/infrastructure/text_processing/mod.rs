mod pdf_adapter;
mod text_normalizer;

pub use pdf_adapter::PdfAdapter;
pub use text_normalizer::normalize_extracted_text;
