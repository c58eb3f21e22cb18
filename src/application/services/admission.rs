use crate::domain::ExtractedText;

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Pre-flight ceilings checked before any expensive work. The size check runs
/// before extraction and the length check runs between extraction and
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPolicy {
    pub max_pdf_size_bytes: u64,
    pub max_text_length: usize,
}

impl AdmissionPolicy {
    pub fn new(max_pdf_size_mb: u64, max_text_length: usize) -> Self {
        Self {
            max_pdf_size_bytes: max_pdf_size_mb * BYTES_PER_MB,
            max_text_length,
        }
    }

    pub fn check_file_size(&self, actual_bytes: u64) -> Result<(), AdmissionError> {
        if actual_bytes > self.max_pdf_size_bytes {
            return Err(AdmissionError::FileTooLarge {
                limit_bytes: self.max_pdf_size_bytes,
                actual_bytes,
            });
        }
        Ok(())
    }

    pub fn check_text_length(&self, text: &ExtractedText) -> Result<(), AdmissionError> {
        let actual_chars = text.char_len();
        if actual_chars > self.max_text_length {
            return Err(AdmissionError::DocumentTooLong {
                limit_chars: self.max_text_length,
                actual_chars,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    #[error(
        "PDF too large. Maximum size is {}MB. Current size: {}MB",
        format_limit_mb(.limit_bytes),
        format_mb(.actual_bytes)
    )]
    FileTooLarge { limit_bytes: u64, actual_bytes: u64 },
    #[error(
        "Document too long. Maximum {} characters. Current: {} characters",
        group_thousands(.limit_chars),
        group_thousands(.actual_chars)
    )]
    DocumentTooLong {
        limit_chars: usize,
        actual_chars: usize,
    },
}

fn format_mb(bytes: &u64) -> String {
    format!("{:.1}", *bytes as f64 / BYTES_PER_MB as f64)
}

// Whole-megabyte limits print without a fraction ("5MB").
fn format_limit_mb(bytes: &u64) -> String {
    if bytes % BYTES_PER_MB == 0 {
        (bytes / BYTES_PER_MB).to_string()
    } else {
        format_mb(bytes)
    }
}

fn group_thousands(value: &usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
