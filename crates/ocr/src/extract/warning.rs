use labelcheck_core::Extraction;

use super::Extractor;
use crate::fuzzy;
use crate::text::normalize_text;

pub const NOT_FOUND: &str = "Government Warning not found";
pub const HEADER_NOT_CAPS: &str = "Header should be 'GOVERNMENT WARNING:' in ALL CAPS";
pub const PARAGRAPH_ONE_MISSING: &str = "Paragraph (1) content incomplete or missing";
pub const PARAGRAPH_TWO_MISSING: &str = "Paragraph (2) content incomplete or missing";

const MATCH_THRESHOLD: f32 = 70.0;
const PARAGRAPH_ONE_KEYWORDS: [&str; 3] = ["surgeon general", "pregnancy", "birth defect"];
const PARAGRAPH_TWO_KEYWORDS: [&str; 4] = ["drive", "operate machinery", "health problem", "impair"];
const FALLBACK_SPAN_CHARS: usize = 200;

re!(re_header, r"(?i)government\s*warning\s*:");
re!(re_span_end, r"\n\s*\n|\n\s*[A-Z]{3}");

/// What the validator observed about a warning statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarningSignals {
    pub header_found: bool,
    pub header_all_caps: bool,
    pub paragraph_one: bool,
    pub paragraph_two: bool,
    /// Similarity to the required statement, 0.0 to 1.0.
    pub similarity: f32,
}

impl WarningSignals {
    /// Issues in reporting order.
    pub fn issues(&self) -> Vec<String> {
        [
            (!self.header_all_caps, HEADER_NOT_CAPS),
            (!self.paragraph_one, PARAGRAPH_ONE_MISSING),
            (!self.paragraph_two, PARAGRAPH_TWO_MISSING),
        ]
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, issue)| issue.to_string())
        .collect()
    }
}

/// Additive score: 0.3 base, 0.2 header, 0.15 capitals, 0.175 per paragraph
/// and up to 0.15 for similarity. Capped at 1.0, discounted to 85% when any
/// issue was raised, rounded to two decimals.
pub fn warning_confidence(signals: &WarningSignals) -> f32 {
    let weight = |present: bool, w: f64| if present { w } else { 0.0 };

    let mut score = 0.3
        + weight(signals.header_found, 0.2)
        + weight(signals.header_all_caps, 0.15)
        + weight(signals.paragraph_one, 0.175)
        + weight(signals.paragraph_two, 0.175)
        + 0.15 * f64::from(signals.similarity.clamp(0.0, 1.0));
    score = score.min(1.0);

    if !signals.issues().is_empty() {
        score *= 0.85;
    }
    ((score * 100.0).round() / 100.0) as f32
}

fn keyword_hits(normalized: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|k| fuzzy::contains(normalized, k, MATCH_THRESHOLD))
        .count()
}

/// From the header to the next blank line or capitalised line start, or the
/// head of the text when no header is printed.
fn warning_span(text: &str) -> String {
    let Some(header) = re_header().find(text) else {
        return text.chars().take(FALLBACK_SPAN_CHARS).collect();
    };
    let rest = &text[header.end()..];
    let end = re_span_end().find(rest).map_or(text.len(), |m| header.end() + m.start());
    text[header.start()..end].trim_end().to_string()
}

impl Extractor {
    /// Check the health warning statement. Missing header is reported as a
    /// missing field carrying a single issue.
    pub fn government_warning(&self, text: &str) -> Extraction {
        let normalized = normalize_text(text);
        let headers = &self.vocabulary.warning_headers;

        let header_found = headers.iter().any(|h| normalized.contains(h.as_str()))
            || headers.iter().any(|h| fuzzy::contains(&normalized, h, MATCH_THRESHOLD));
        if !header_found {
            tracing::debug!(field = "government_warning", "no warning header");
            return Extraction::missing().with_issues(vec![NOT_FOUND.to_string()]);
        }

        let signals = WarningSignals {
            header_found,
            header_all_caps: text.contains("GOVERNMENT WARNING") || text.contains("GOVERNMENT  WARNING"),
            paragraph_one: keyword_hits(&normalized, &PARAGRAPH_ONE_KEYWORDS) >= 2,
            paragraph_two: keyword_hits(&normalized, &PARAGRAPH_TWO_KEYWORDS) >= 2,
            similarity: fuzzy::ratio(&normalized, &normalize_text(&self.vocabulary.required_warning)) / 100.0,
        };
        let confidence = warning_confidence(&signals);
        tracing::debug!(field = "government_warning", ?signals, confidence, "warning checked");

        Extraction::found(warning_span(text), confidence).with_issues(signals.issues())
    }
}
