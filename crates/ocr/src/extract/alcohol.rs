use std::str::FromStr;

use labelcheck_core::{Abv, Extraction};
use regex::Regex;
use rust_decimal::Decimal;

use super::{Extractor, Rule};

re!(re_pct_alc_vol, r"(?i)(\d{1,2}(?:\.\d{1,2})?)\s*%\s*alc\.?\s*/?\s*vol\.?");
re!(re_pct_abv, r"(?i)(\d{1,2}(?:\.\d{1,2})?)\s*%\s*abv");
re!(re_pct_alcohol, r"(?i)(\d{1,2}(?:\.\d{1,2})?)\s*%\s*alcohol");
re!(re_proof, r"(?i)(\d{2,3})\s*proof");
re!(re_bare_pct, r"(\d{1,2}(?:\.\d{1,2})?)\s*%");
re!(re_alc_vol_prefix, r"(?i)alc\.?\s*/?\s*vol\.?\s*[:\s]*(\d{1,2}(?:\.\d{1,2})?)");

#[derive(Clone, Copy)]
enum Scale {
    Percent,
    Proof,
}

const STRENGTH_PATTERNS: &[(fn() -> &'static Regex, Scale, f32)] = &[
    (re_pct_alc_vol, Scale::Percent, 0.95),
    (re_pct_abv, Scale::Percent, 0.90),
    (re_pct_alcohol, Scale::Percent, 0.90),
    (re_proof, Scale::Proof, 0.90),
    (re_bare_pct, Scale::Percent, 0.80),
    (re_alc_vol_prefix, Scale::Percent, 0.85),
];

const ALCOHOL_RULES: &[Rule<Abv>] = &[("strength_pattern", Extractor::alcohol_from_patterns)];

impl Extractor {
    /// Alcohol strength as printed, with the ABV it denotes. Proof statements
    /// are halved.
    pub fn alcohol_content(&self, text: &str) -> Extraction<Abv> {
        self.cascade("alcohol_content", text, ALCOHOL_RULES)
    }

    fn alcohol_from_patterns(&self, text: &str) -> Option<Extraction<Abv>> {
        STRENGTH_PATTERNS.iter().find_map(|(pattern, scale, confidence)| {
            let caps = pattern().captures(text)?;
            let number = Decimal::from_str(caps.get(1)?.as_str()).ok()?;
            let abv = match scale {
                Scale::Percent => Abv::from_percent(number),
                Scale::Proof => Abv::from_proof(number),
            };
            Some(Extraction::found(caps.get(0)?.as_str().trim(), *confidence).with_parsed(abv))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abv(text: &str) -> (Option<String>, Option<Decimal>, f32) {
        let e = Extractor::default().alcohol_content(text);
        (e.value, e.parsed.map(Abv::percent), e.confidence)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn alc_vol_statement() {
        assert_eq!(abv("45% Alc./Vol. (90 Proof)"), (Some("45% Alc./Vol.".into()), Some(dec("45")), 0.95));
    }

    #[test]
    fn abv_and_alcohol_suffixes() {
        assert_eq!(abv("12.5% ABV"), (Some("12.5% ABV".into()), Some(dec("12.5")), 0.90));
        assert_eq!(abv("40% alcohol"), (Some("40% alcohol".into()), Some(dec("40")), 0.90));
    }

    #[test]
    fn proof_is_halved_exactly() {
        assert_eq!(abv("100 PROOF").1, Some(dec("50")));
        assert_eq!(abv("90 proof").1, Some(dec("45")));
        assert_eq!(abv("101 Proof").1, Some(dec("50.5")));
        assert_eq!(abv("90 proof").2, 0.90);
    }

    #[test]
    fn bare_percent() {
        assert_eq!(abv("strength 43%"), (Some("43%".into()), Some(dec("43")), 0.80));
    }

    #[test]
    fn alc_vol_prefix_form() {
        assert_eq!(abv("ALC/VOL: 47.5"), (Some("ALC/VOL: 47.5".into()), Some(dec("47.5")), 0.85));
    }

    #[test]
    fn percent_beats_proof_when_both_present() {
        let (_, value, confidence) = abv("80 proof\n40% alc/vol");
        assert_eq!(value, Some(dec("40")));
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn no_strength_is_missing() {
        assert_eq!(abv("750 mL bourbon"), (None, None, 0.0));
    }
}
