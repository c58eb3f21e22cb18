use paperlens::application::services::{AdmissionError, AdmissionPolicy, BYTES_PER_MB};
use paperlens::domain::ExtractedText;

#[test]
fn given_six_mb_file_when_checking_five_mb_limit_then_rejects_with_readable_message() {
    let policy = AdmissionPolicy::new(5, 50_000);

    let err = policy.check_file_size(6 * BYTES_PER_MB).unwrap_err();

    assert_eq!(
        err.to_string(),
        "PDF too large. Maximum size is 5MB. Current size: 6.0MB"
    );
}

#[test]
fn given_file_exactly_at_limit_when_checking_then_accepts() {
    let policy = AdmissionPolicy::new(5, 50_000);

    assert!(policy.check_file_size(5 * BYTES_PER_MB).is_ok());
    assert!(policy.check_file_size(5 * BYTES_PER_MB + 1).is_err());
}

#[test]
fn given_fractional_oversize_when_checking_then_reports_one_decimal() {
    let policy = AdmissionPolicy::new(5, 50_000);

    let err = policy
        .check_file_size(5 * BYTES_PER_MB + BYTES_PER_MB / 2)
        .unwrap_err();

    assert_eq!(
        err,
        AdmissionError::FileTooLarge {
            limit_bytes: 5 * BYTES_PER_MB,
            actual_bytes: 5 * BYTES_PER_MB + BYTES_PER_MB / 2,
        }
    );
    assert!(err.to_string().ends_with("Current size: 5.5MB"));
}

#[test]
fn given_overlong_text_when_checking_then_message_groups_thousands() {
    let policy = AdmissionPolicy::new(5, 50_000);
    let text = ExtractedText::new("x".repeat(61_234));

    let err = policy.check_text_length(&text).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Document too long. Maximum 50,000 characters. Current: 61,234 characters"
    );
}

#[test]
fn given_text_at_limit_when_checking_then_accepts() {
    let policy = AdmissionPolicy::new(5, 10);

    assert!(policy.check_text_length(&ExtractedText::new("0123456789")).is_ok());
    assert!(policy.check_text_length(&ExtractedText::new("0123456789a")).is_err());
}

#[test]
fn given_multibyte_text_when_checking_then_counts_characters_not_bytes() {
    let policy = AdmissionPolicy::new(5, 4);

    assert!(policy.check_text_length(&ExtractedText::new("ærøå")).is_ok());
}
