use labelcheck_core::Extraction;

use super::{Extractor, Rule};
use crate::text::{collapse_whitespace, keep_chars, strip_punctuation, title_words};

/// Producer names shorter than this are treated as OCR debris.
const MIN_PRODUCER_CHARS: usize = 6;

re!(re_bottling_statement, r"(?i)(?:bottled|distilled).*?(?:distilling\s*(?:co\.?|company)|distillery)");
re!(re_trailing_name, r"[A-Z][A-Za-z\s]{5,}?\s*$");
re!(re_bottled_by, r"(?i)(?:bottled|distilled)\s*(?:&|and)?\s*(?:by)?\s*[:\s]*([A-Z][A-Za-z\s]{3,}?(?:CO\.?|Company|Inc\.?|LLC|Distillery))");
re!(re_distilling_name, r"(?i)([A-Z][A-Za-z\s]+(?:DISTILLING|DISTILLERY)(?:\s+CO\.?)?)");
re!(re_city_state, r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?,[ \t]*(?:[A-Z]{2}|[A-Z][a-z]+))");

const BOTTLER_RULES: &[Rule<()>] = &[
    ("name_before_statement", Extractor::bottler_before_statement),
    ("bottled_by", Extractor::bottler_from_bottled_by),
    ("distilling_name", Extractor::bottler_from_distilling_name),
    ("city_state", Extractor::bottler_from_location),
];

/// Letters, spaces and dots only, whitespace collapsed.
fn clean_producer(raw: &str) -> Option<String> {
    let kept = keep_chars(raw, |c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '.');
    let cleaned = collapse_whitespace(&kept);
    (cleaned.chars().count() >= MIN_PRODUCER_CHARS).then_some(cleaned)
}

fn first_capture(pattern: &regex::Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    Some(caps.get(1)?.as_str().to_string())
}

impl Extractor {
    /// Bottler or producer statement. Informational, not counted toward
    /// compliance.
    pub fn bottler_producer(&self, text: &str) -> Extraction {
        self.cascade("bottler_producer", text, BOTTLER_RULES)
    }

    /// A brand-like name printed right before "bottled by ... distillery".
    fn bottler_before_statement(&self, text: &str) -> Option<Extraction> {
        let statement = re_bottling_statement().find(text)?;
        let before = &text[..statement.start()];
        let name = re_trailing_name().find(before)?;
        let name = collapse_whitespace(&strip_punctuation(name.as_str()));
        (name.chars().count() >= MIN_PRODUCER_CHARS)
            .then(|| Extraction::found(format!("{} Distilling Co", title_words(&name)), 0.85))
    }

    fn bottler_from_bottled_by(&self, text: &str) -> Option<Extraction> {
        let producer = clean_producer(&first_capture(re_bottled_by(), text)?)?;
        Some(Extraction::found(title_words(&producer), 0.90))
    }

    fn bottler_from_distilling_name(&self, text: &str) -> Option<Extraction> {
        let producer = clean_producer(&first_capture(re_distilling_name(), text)?)?;
        Some(Extraction::found(title_words(&producer), 0.85))
    }

    fn bottler_from_location(&self, text: &str) -> Option<Extraction> {
        let location = first_capture(re_city_state(), text)?;
        Some(Extraction::found(format!("Bottled in {location}"), 0.60))
    }
}
