use paperlens::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   \n"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  Summarize this.  "), "Summarize this.");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_total_length() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (250 chars total)"));
}

#[test]
fn given_multibyte_prompt_over_limit_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "ø".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"ø".repeat(100)));
    assert!(sanitized.ends_with("(150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let sanitized = sanitize_prompt("Authorization: Bearer sk-abc123 sent");

    assert_eq!(sanitized, "Authorization: Bearer [REDACTED] sent");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let sanitized = sanitize_prompt("token=one&x=1&token=two password=hunter2");

    assert_eq!(
        sanitized,
        "token=[REDACTED]&x=1&token=[REDACTED] password=[REDACTED]"
    );
}
