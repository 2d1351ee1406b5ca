//! Rule cascades that turn OCR text into label fields.
//!
//! Every field is extracted by an ordered list of rules evaluated top to
//! bottom; the first rule that applies decides the value and its confidence.
//! Nothing is scored across rules, so each result traces back to one rule.

use labelcheck_core::Extraction;
use regex::{Regex, RegexBuilder};

use crate::types::LabelFields;
use crate::vocab::Vocabulary;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

mod alcohol;
mod bottler;
mod brand;
mod class_type;
mod net_contents;
mod origin;
mod warning;

pub use warning::{warning_confidence, WarningSignals};

/// A named cascade step. Returns `Some` when the rule applies.
type Rule<P> = (&'static str, fn(&Extractor, &str) -> Option<Extraction<P>>);

struct CompiledBrand {
    pattern: Regex,
    display: Option<String>,
}

pub struct Extractor {
    vocabulary: Vocabulary,
    known_brands: Vec<CompiledBrand>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl Extractor {
    /// Build an extractor over `vocabulary`. Brand patterns that do not compile
    /// are left out of the cascade.
    pub fn new(vocabulary: Vocabulary) -> Self {
        let known_brands = vocabulary
            .known_brands
            .iter()
            .filter_map(|b| match RegexBuilder::new(&b.pattern).case_insensitive(true).build() {
                Ok(pattern) => Some(CompiledBrand { pattern, display: b.display.clone() }),
                Err(e) => {
                    tracing::warn!(pattern = %b.pattern, "skipping known brand pattern: {e}");
                    None
                }
            })
            .collect();

        Self { vocabulary, known_brands }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extract every label field from merged OCR text. Fields are independent
    /// of one another.
    pub fn extract(&self, text: &str) -> LabelFields {
        LabelFields {
            brand_name: self.brand_name(text),
            class_type: self.class_type(text),
            alcohol_content: self.alcohol_content(text),
            net_contents: self.net_contents(text),
            government_warning: self.government_warning(text),
            bottler_producer: self.bottler_producer(text),
            country_of_origin: self.country_of_origin(text),
        }
    }

    fn cascade<P>(&self, field: &'static str, text: &str, rules: &[Rule<P>]) -> Extraction<P> {
        if text.trim().is_empty() {
            return Extraction::missing();
        }
        for (name, rule) in rules {
            if let Some(found) = rule(self, text) {
                tracing::debug!(field, rule = *name, confidence = found.confidence, "rule matched");
                return found;
            }
        }
        tracing::debug!(field, "no rule matched");
        Extraction::missing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::KnownBrand;
    use labelcheck_core::FieldStatus;

    const FULL_LABEL: &str = "\
HIGH RIDGE
KENTUCKY STRAIGHT BOURBON WHISKEY
45% ALC/VOL (90 PROOF)
750 mL
BOTTLED BY HIGH RIDGE DISTILLING CO.
Louisville, KY
GOVERNMENT WARNING: (1) According to the Surgeon General, women should not drink alcoholic beverages during pregnancy because of the risk of birth defects. (2) Consumption of alcoholic beverages impairs your ability to drive a car or operate machinery, and may cause health problems.";

    #[test]
    fn full_label_is_compliant() {
        let fields = Extractor::default().extract(FULL_LABEL);
        assert_eq!(fields.brand_name.value.as_deref(), Some("High Ridge Distilling Co"));
        assert_eq!(fields.class_type.value.as_deref(), Some("Kentucky Straight Bourbon Whiskey"));
        assert_eq!(fields.alcohol_content.value.as_deref(), Some("45% ALC/VOL"));
        assert_eq!(fields.net_contents.value.as_deref(), Some("750 mL"));
        assert!(fields.government_warning.issues.is_empty());
        assert!(fields.summary().is_compliant);
        assert_eq!(fields.country_of_origin.value.as_deref(), Some("USA"));
    }

    #[test]
    fn empty_text_is_all_missing() {
        let fields = Extractor::default().extract("");
        assert!(fields.required_statuses().iter().all(|s| *s == FieldStatus::Missing));
        assert!(!fields.bottler_producer.is_found());
        assert!(!fields.country_of_origin.is_found());
        assert_eq!(fields.summary().missing, 5);
    }

    #[test]
    fn garbage_input_does_not_panic() {
        let _ = Extractor::default().extract("!@#$%^&*()\n\0\x01\x02|||{}[]");
    }

    #[test]
    fn invalid_brand_pattern_is_skipped() {
        let vocabulary = Vocabulary {
            known_brands: vec![
                KnownBrand { pattern: "(unclosed".into(), display: Some("Broken".into()) },
                KnownBrand { pattern: r"FOUR\s*ROSES".into(), display: Some("Four Roses".into()) },
            ],
            ..Vocabulary::default()
        };
        let extractor = Extractor::new(vocabulary);
        let brand = extractor.brand_name("four roses\nbourbon");
        assert_eq!(brand.value.as_deref(), Some("Four Roses"));
    }
}
