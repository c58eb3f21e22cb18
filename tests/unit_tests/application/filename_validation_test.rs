use paperlens::application::services::{SummaryError, filename_from_url, validate_filename};

#[test]
fn given_api_file_path_when_resolving_then_returns_last_segment() {
    assert_eq!(
        filename_from_url("/api/files/3f2a.pdf").unwrap(),
        "3f2a.pdf"
    );
    assert_eq!(filename_from_url("abc.pdf").unwrap(), "abc.pdf");
}

#[test]
fn given_empty_file_url_when_resolving_then_reports_missing_url() {
    assert_eq!(filename_from_url(""), Err(SummaryError::MissingFileUrl));
    assert_eq!(filename_from_url("   "), Err(SummaryError::MissingFileUrl));
}

#[test]
fn given_trailing_slash_when_resolving_then_rejects_empty_filename() {
    assert_eq!(
        filename_from_url("/api/files/"),
        Err(SummaryError::InvalidFilename)
    );
}

#[test]
fn given_traversal_attempts_when_validating_then_rejects() {
    for name in ["..", "..pdf", "a..b.pdf", "a\\b.pdf", "a/b.pdf", ""] {
        assert_eq!(
            validate_filename(name),
            Err(SummaryError::InvalidFilename),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn given_generated_name_when_validating_then_accepts() {
    assert!(validate_filename("6f1c2b8e-5d1a-4c57-9f43-1b7e0c2d9a10.pdf").is_ok());
}
