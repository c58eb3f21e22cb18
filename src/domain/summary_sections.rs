use regex::Regex;
use serde::Serialize;

pub const DOCUMENT_OVERVIEW: &str = "Document Overview";
pub const KEY_POINTS: &str = "Key Points";
pub const TECHNICAL_DETAILS: &str = "Technical Details";
pub const CLAIMS_AND_INSIGHTS: &str = "Claims & Insights";
pub const SUMMARY: &str = "Summary";

const NEXT_HEADING: &str = "\n## ";

/// Returns the trimmed body under `## <section_name>` up to the next level-2
/// heading, or an empty string when the heading is missing.
///
/// Heading lookup is case-insensitive and headings may appear in any order.
/// Malformed markdown degrades to empty sections instead of failing.
pub fn extract_section(markdown: &str, section_name: &str) -> String {
    let pattern = format!(r"(?i)## {}\s*\n", regex::escape(section_name));
    let Ok(heading) = Regex::new(&pattern) else {
        return String::new();
    };

    let Some(found) = heading.find(markdown) else {
        return String::new();
    };

    let body = &markdown[found.end()..];
    let end = body.find(NEXT_HEADING).unwrap_or(body.len());

    body[..end].trim().to_string()
}

/// The five sections the summary prompt asks the model to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySections {
    pub document_overview: String,
    pub key_points: String,
    pub technical_details: String,
    pub claims_and_insights: String,
    pub summary: String,
}

impl SummarySections {
    pub fn parse(markdown: &str) -> Self {
        Self {
            document_overview: extract_section(markdown, DOCUMENT_OVERVIEW),
            key_points: extract_section(markdown, KEY_POINTS),
            technical_details: extract_section(markdown, TECHNICAL_DETAILS),
            claims_and_insights: extract_section(markdown, CLAIMS_AND_INSIGHTS),
            summary: extract_section(markdown, SUMMARY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.document_overview.is_empty()
            && self.key_points.is_empty()
            && self.technical_details.is_empty()
            && self.claims_and_insights.is_empty()
            && self.summary.is_empty()
    }
}
