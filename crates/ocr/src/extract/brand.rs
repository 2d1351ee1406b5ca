use labelcheck_core::Extraction;

use super::{Extractor, Rule};
use crate::text::{content_lines, strip_punctuation, title_words};

/// Lines scanned by the heading heuristic.
const HEADING_LINES: usize = 12;
/// Words kept from a heading line.
const HEADING_WORDS: usize = 4;

re!(re_caps_distilling, r"\b[A-Z]{2,}(?:\s+[A-Z]{2,})+\s+(?:DISTILLING|DISTILLERY)(?:\s+CO\b\.?)?");
re!(re_distillery_name, r"(?i)[A-Z][A-Za-z\s]{2,}(?:DISTILLERY|DISTILLING|BREWERY)");

const BRAND_RULES: &[Rule<()>] = &[
    ("caps_distilling", Extractor::brand_from_caps_distilling),
    ("known_brand", Extractor::brand_from_known),
    ("distillery_name", Extractor::brand_from_distillery_name),
    ("heading_line", Extractor::brand_from_heading),
];

/// Words after the last standalone "by", so "BOTTLED BY X DISTILLING" names X.
fn after_by(words: &[&str]) -> Vec<String> {
    let start = words
        .iter()
        .rposition(|w| w.eq_ignore_ascii_case("by"))
        .map_or(0, |i| i + 1);
    words[start..].iter().map(|w| w.to_string()).collect()
}

fn producer_words(matched: &str) -> Vec<String> {
    let cleaned = strip_punctuation(matched);
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    after_by(&words)
}

impl Extractor {
    pub fn brand_name(&self, text: &str) -> Extraction {
        self.cascade("brand_name", text, BRAND_RULES)
    }

    fn brand_from_caps_distilling(&self, text: &str) -> Option<Extraction> {
        content_lines(text).find_map(|line| {
            let m = re_caps_distilling().find(line)?;
            let words = producer_words(m.as_str());
            (words.len() >= 3).then(|| Extraction::found(title_words(&words.join(" ")), 0.95))
        })
    }

    fn brand_from_known(&self, text: &str) -> Option<Extraction> {
        self.known_brands.iter().find_map(|brand| {
            content_lines(text).find_map(|line| {
                let m = brand.pattern.find(line)?;
                Some(match &brand.display {
                    Some(display) => Extraction::found(display.clone(), 0.90),
                    None => Extraction::found(title_words(m.as_str()), 0.85),
                })
            })
        })
    }

    fn brand_from_distillery_name(&self, text: &str) -> Option<Extraction> {
        content_lines(text).find_map(|line| {
            let m = re_distillery_name().find(line)?;
            let words = producer_words(m.as_str());
            (words.len() >= 2).then(|| Extraction::found(title_words(&words.join(" ")), 0.75))
        })
    }

    /// First early line with at least two meaningful, capitalised words.
    fn brand_from_heading(&self, text: &str) -> Option<Extraction> {
        content_lines(text).take(HEADING_LINES).find_map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() < 2 {
                return None;
            }

            let meaningful = words
                .iter()
                .filter(|w| {
                    !self.vocabulary.is_brand_stop_word(w)
                        && !w.chars().any(|c| c.is_ascii_digit())
                        && w.chars().count() > 2
                })
                .count();
            let capitalised = words
                .iter()
                .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
                .count();
            if meaningful < 2 || capitalised < 2 {
                return None;
            }

            let cleaned = strip_punctuation(line);
            let heading: Vec<&str> = cleaned.split_whitespace().take(HEADING_WORDS).collect();
            (!heading.is_empty()).then(|| Extraction::found(title_words(&heading.join(" ")), 0.55))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{KnownBrand, Vocabulary};

    fn brand(text: &str) -> (Option<String>, f32) {
        let e = Extractor::default().brand_name(text);
        (e.value, e.confidence)
    }

    // ── Caps distilling line ───────────────────────────────────────────────

    #[test]
    fn caps_distilling_line_wins() {
        let (value, confidence) = brand("Small Batch\nEAGLE PEAK DISTILLING CO.\nHigh Ridge");
        assert_eq!(value.as_deref(), Some("Eagle Peak Distilling Co"));
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn caps_distilling_drops_bottled_by_prefix() {
        let (value, _) = brand("BOTTLED BY EAGLE PEAK DISTILLERY");
        assert_eq!(value.as_deref(), Some("Eagle Peak Distillery"));
    }

    #[test]
    fn caps_rule_needs_three_words() {
        // "PEAK DISTILLERY" alone is two words; falls to the distillery-name rule.
        let (value, confidence) = brand("BY PEAK DISTILLERY");
        assert_eq!(value.as_deref(), Some("Peak Distillery"));
        assert_eq!(confidence, 0.75);
    }

    #[test]
    fn mixed_case_distilling_is_not_caps_rule() {
        let (value, confidence) = brand("Eagle Peak Distilling Co");
        assert_eq!(value.as_deref(), Some("Eagle Peak Distilling"));
        assert_eq!(confidence, 0.75);
    }

    // ── Known brands ───────────────────────────────────────────────────────

    #[test]
    fn known_brand_uses_display_name() {
        let (value, confidence) = brand("jack daniels\nold no. 7");
        assert_eq!(value.as_deref(), Some("Jack Daniel's"));
        assert_eq!(confidence, 0.90);
    }

    #[test]
    fn known_brand_tolerates_merged_words() {
        let (value, _) = brand("HIGHRIDGE\nBOURBON");
        assert_eq!(value.as_deref(), Some("High Ridge"));
    }

    #[test]
    fn pattern_brand_without_display_is_title_cased() {
        let (value, confidence) = brand("OLD FORESTER\nbourbon");
        assert_eq!(value.as_deref(), Some("Old Forester"));
        assert_eq!(confidence, 0.85);
    }

    #[test]
    fn substituted_vocabulary_changes_known_brands() {
        let vocabulary = Vocabulary {
            known_brands: vec![KnownBrand { pattern: r"EAGLE\s*RARE".into(), display: Some("Eagle Rare".into()) }],
            ..Vocabulary::default()
        };
        let e = Extractor::new(vocabulary).brand_name("eagle rare\n10 years");
        assert_eq!(e.value.as_deref(), Some("Eagle Rare"));

        let e = Extractor::default().brand_name("eagle rare\n10 years");
        assert_ne!(e.value.as_deref(), Some("Eagle Rare"));
    }

    // ── Heading heuristic ──────────────────────────────────────────────────

    #[test]
    fn heading_line_fallback() {
        let (value, confidence) = brand("Copper Fox Reserve Select Edition\n45% alc/vol");
        assert_eq!(value.as_deref(), Some("Copper Fox Reserve Select"));
        assert_eq!(confidence, 0.55);
    }

    #[test]
    fn heading_skips_stop_word_lines() {
        let (value, _) = brand("Straight Bourbon Whiskey\nCopper Fox\n750 mL");
        assert_eq!(value.as_deref(), Some("Copper Fox"));
    }

    #[test]
    fn heading_only_looks_at_first_lines() {
        let mut text = "x\n".repeat(12);
        text.push_str("Copper Fox");
        assert_eq!(brand(&text).0, None);
    }

    #[test]
    fn nothing_brand_like_is_missing() {
        assert_eq!(brand("750 mL\n45% alc/vol"), (None, 0.0));
        assert_eq!(brand(""), (None, 0.0));
    }
}
