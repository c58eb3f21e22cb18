use paperlens::domain::{SummarySections, extract_section};

use crate::helpers::SAMPLE_SUMMARY;

#[test]
fn given_key_points_between_headings_when_extracting_then_returns_trimmed_body() {
    let markdown = "## Key Points\n- a\n- b\n## Summary\nx";

    assert_eq!(extract_section(markdown, "Key Points"), "- a\n- b");
    assert_eq!(extract_section(markdown, "Summary"), "x");
}

#[test]
fn given_missing_heading_when_extracting_then_returns_empty_string() {
    let markdown = "## Key Points\n- a\n";

    assert_eq!(extract_section(markdown, "Technical Details"), "");
}

#[test]
fn given_lowercase_heading_when_extracting_then_matches_case_insensitively() {
    let markdown = "## key points\n- a\n## SUMMARY\nDone.";

    assert_eq!(extract_section(markdown, "Key Points"), "- a");
    assert_eq!(extract_section(markdown, "Summary"), "Done.");
}

#[test]
fn given_heading_with_regex_metacharacters_when_extracting_then_matches_literally() {
    let markdown = "## Claims & Insights\n- 40% faster (p < 0.05)\n## Summary\nok";

    assert_eq!(
        extract_section(markdown, "Claims & Insights"),
        "- 40% faster (p < 0.05)"
    );
}

#[test]
fn given_sections_in_any_order_when_parsing_then_each_is_found() {
    let markdown = "## Summary\nEnd.\n\n## Document Overview\nStart.\n\n## Key Points\n- k";

    let sections = SummarySections::parse(markdown);

    assert_eq!(sections.summary, "End.");
    assert_eq!(sections.document_overview, "Start.");
    assert_eq!(sections.key_points, "- k");
    assert_eq!(sections.technical_details, "");
}

#[test]
fn given_full_model_response_when_parsing_then_all_five_sections_are_filled() {
    let sections = SummarySections::parse(SAMPLE_SUMMARY);

    assert_eq!(
        sections.document_overview,
        "A study of cache-aware summarisation."
    );
    assert_eq!(sections.key_points, "- a\n- b");
    assert_eq!(sections.technical_details, "- Rust and Postgres");
    assert_eq!(sections.claims_and_insights, "- Caching saves model calls");
    assert_eq!(sections.summary, "Short and to the point.");
    assert!(!sections.is_empty());
}

#[test]
fn given_plain_prose_when_parsing_then_sections_are_empty_without_error() {
    let sections = SummarySections::parse("The model ignored the format entirely.");

    assert!(sections.is_empty());
}

#[test]
fn given_sections_when_serializing_then_uses_camel_case_keys() {
    let sections = SummarySections::parse(SAMPLE_SUMMARY);

    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json["keyPoints"], "- a\n- b");
    assert!(json.get("claimsAndInsights").is_some());
    assert!(json.get("documentOverview").is_some());
}
