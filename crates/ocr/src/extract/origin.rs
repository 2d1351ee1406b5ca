use labelcheck_core::Extraction;

use super::{Extractor, Rule};
use crate::text::{contains_words, normalize_text, title_words};

re!(re_product_of, r"(?i)product\s+of\s+(?:the\s+)?([A-Za-z.\s]+?)(?:\.\s|\.$|,|\n|$)");

const ORIGIN_RULES: &[Rule<()>] = &[
    ("product_of", Extractor::origin_from_statement),
    ("country_name", Extractor::origin_from_country),
    ("us_state", Extractor::origin_from_state),
];

impl Extractor {
    /// Country of origin. Informational, not counted toward compliance.
    pub fn country_of_origin(&self, text: &str) -> Extraction {
        self.cascade("country_of_origin", text, ORIGIN_RULES)
    }

    fn origin_from_statement(&self, text: &str) -> Option<Extraction> {
        let caps = re_product_of().captures(text)?;
        let named = normalize_text(caps.get(1)?.as_str());
        if named.is_empty() {
            return None;
        }
        let country = match self.vocabulary.country_for(&named) {
            Some(country) => country.to_string(),
            None => title_words(&named),
        };
        Some(Extraction::found(country, 0.95))
    }

    fn origin_from_country(&self, text: &str) -> Option<Extraction> {
        let normalized = normalize_text(text);
        self.vocabulary
            .countries
            .iter()
            .find(|c| contains_words(&normalized, &c.alias))
            .map(|c| Extraction::found(c.country.clone(), 0.90))
    }

    fn origin_from_state(&self, text: &str) -> Option<Extraction> {
        let normalized = normalize_text(text);
        self.vocabulary
            .us_states
            .iter()
            .any(|state| contains_words(&normalized, state))
            .then(|| Extraction::found("USA", 0.75))
    }
}
