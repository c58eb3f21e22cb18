use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SOFT_WRAP_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").expect("valid hyphenation regex")
});

/// Cleans raw text-layer output: NFKC-normalizes ligatures and full-width
/// forms, re-joins words hyphenated across line breaks, drops control
/// characters, collapses runs of spaces, keeps at most one blank line between
/// paragraphs and trims the result.
pub fn normalize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    let joined = SOFT_WRAP_HYPHEN.replace_all(&normalized, "$head$tail");

    let paragraphs = joined
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .split(|line| line.is_empty())
        .filter(|block| !block.is_empty())
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>();

    paragraphs.join("\n\n")
}
