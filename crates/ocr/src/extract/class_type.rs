use labelcheck_core::Extraction;
use regex::Regex;

use super::{Extractor, Rule};
use crate::fuzzy;
use crate::text::{capitalize, normalize_text, title_words};

/// Beverage types shorter than this only match as exact words: one misread
/// letter in "wine" or "sake" already spells an ordinary word.
const MIN_FUZZY_WORD: usize = 5;

re!(re_kentucky_straight, r"(?i)kentucky\s+straight\s+(?:bourbon|whiskey|whisky)(?:\s+(?:whiskey|whisky))?");
re!(re_straight, r"(?i)straight\s+(?:rye|bourbon|wheat|malt)(?:\s+(?:whiskey|whisky))?");
re!(re_tennessee, r"(?i)tennessee\s+(?:whiskey|whisky|bourbon)(?:\s+(?:whiskey|whisky))?");
re!(re_single_barrel, r"(?i)single\s+barrel\s+(?:bourbon|whiskey|whisky)(?:\s+(?:whiskey|whisky))?");
re!(re_small_batch, r"(?i)small\s+batch\s+(?:bourbon|whiskey|whisky)(?:\s+(?:whiskey|whisky))?");
re!(re_blended, r"(?i)blended\s+(?:scotch\s+)?(?:whiskey|whisky)");
re!(re_grain_whiskey, r"(?i)(?:bourbon|rye|wheat|malt|corn)\s+(?:whiskey|whisky)");
re!(re_regional_whisky, r"(?i)(?:scotch|irish|canadian|japanese)\s+(?:whiskey|whisky)");
re!(re_bare_spirit, r"(?i)\b(?:bourbon|whiskey|whisky|vodka|gin|rum|tequila|brandy|cognac)\b");

/// Designations from most to least specific.
const DESIGNATIONS: &[(fn() -> &'static Regex, f32)] = &[
    (re_kentucky_straight, 0.95),
    (re_straight, 0.92),
    (re_tennessee, 0.92),
    (re_single_barrel, 0.90),
    (re_small_batch, 0.90),
    (re_blended, 0.88),
    (re_grain_whiskey, 0.88),
    (re_regional_whisky, 0.88),
    (re_bare_spirit, 0.70),
];

const CLASS_RULES: &[Rule<()>] = &[
    ("designation", Extractor::class_from_designation),
    ("beverage_word", Extractor::class_from_beverage_word),
    ("beverage_fuzzy", Extractor::class_from_fuzzy_word),
];

/// Capitalize words longer than two characters, keep the rest as printed.
fn recase(designation: &str) -> String {
    designation
        .split_whitespace()
        .map(|w| if w.chars().count() > 2 { capitalize(w) } else { w.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Extractor {
    pub fn class_type(&self, text: &str) -> Extraction {
        self.cascade("class_type", text, CLASS_RULES)
    }

    fn class_from_designation(&self, text: &str) -> Option<Extraction> {
        DESIGNATIONS.iter().find_map(|(pattern, confidence)| {
            let m = pattern().find(text)?;
            Some(Extraction::found(recase(m.as_str()), *confidence))
        })
    }

    fn class_from_beverage_word(&self, text: &str) -> Option<Extraction> {
        let normalized = normalize_text(text);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        self.vocabulary
            .beverage_types
            .iter()
            .find(|b| words.contains(&b.as_str()))
            .map(|b| Extraction::found(title_words(b), 0.65))
    }

    /// A beverage type with misread letters. Only same-length words are
    /// compared, so "brand" never reads as "brandy".
    fn class_from_fuzzy_word(&self, text: &str) -> Option<Extraction> {
        let normalized = normalize_text(text);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        self.vocabulary
            .beverage_types
            .iter()
            .filter(|b| b.chars().count() >= MIN_FUZZY_WORD)
            .find(|b| {
                let len = b.chars().count();
                words
                    .iter()
                    .filter(|w| w.chars().count() == len)
                    .any(|w| fuzzy::ratio(w, b) >= fuzzy::DEFAULT_THRESHOLD)
            })
            .map(|b| Extraction::found(title_words(b), 0.65))
    }
}
