use std::str::FromStr;

use labelcheck_core::{Extraction, NetContents, VolumeUnit};
use regex::Regex;
use rust_decimal::Decimal;

use super::{Extractor, Rule};
use crate::text::{contains_words, normalize_text};

/// Plausible ABV range for a spirit whose size numeral lost its unit.
const MIN_INFERRED_ABV: u32 = 30;
const MAX_INFERRED_ABV: u32 = 70;
/// ABV from which a spirit is assumed to come in the standard bottle.
const STANDARD_BOTTLE_ABV: u32 = 40;
const STANDARD_BOTTLE_ML: u32 = 750;

re!(re_milliliters, r"(?i)(\d+(?:\.\d+)?)\s*(ml|milliliter)");
re!(re_liters, r"(?i)(\d+(?:\.\d+)?)\s*(liter|litre|l)\b");
re!(re_fluid_ounces, r"(?i)(\d+(?:\.\d+)?)\s*(fl\.?\s*oz|fluid\s*ounce|oz)");
re!(re_misread_ml, r"(\d+)\s*(mI|ml|mL)\b");
re!(re_bare_liter, r"(?i)(\d+)\s*(l)\b");
re!(re_size_ml, r"(\d{3,4})\s*(ml|ML)");
re!(re_abv_alc, r"(?i)(\d{1,2}(?:\.\d{1,2})?)\s*%\s*alc");

/// Amount in group 1, unit spelling in group 2.
const UNIT_PATTERNS: &[(fn() -> &'static Regex, f32)] = &[
    (re_milliliters, 0.95),
    (re_liters, 0.95),
    (re_fluid_ounces, 0.90),
    (re_misread_ml, 0.85),
    (re_bare_liter, 0.85),
    (re_size_ml, 0.85),
];

const NET_RULES: &[Rule<NetContents>] = &[
    ("unit_pattern", Extractor::net_from_unit),
    ("bare_bottle_size", Extractor::net_from_bare_size),
    ("spirit_default", Extractor::net_from_spirit_default),
];

/// Whether `number` appears in `text` as a whole token (not inside 1750 or 750ml).
fn has_bare_number(text: &str, number: u32) -> bool {
    let number = number.to_string();
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|token| token == number)
}

fn stated_abv(text: &str) -> Option<Decimal> {
    let caps = re_abv_alc().captures(text)?;
    Decimal::from_str(caps.get(1)?.as_str()).ok()
}

fn size_result(size_ml: u32, confidence: f32) -> Extraction<NetContents> {
    let contents = NetContents::milliliters(size_ml);
    Extraction::found(contents.to_string(), confidence).with_parsed(contents)
}

impl Extractor {
    pub fn net_contents(&self, text: &str) -> Extraction<NetContents> {
        self.cascade("net_contents", text, NET_RULES)
    }

    fn net_from_unit(&self, text: &str) -> Option<Extraction<NetContents>> {
        UNIT_PATTERNS.iter().find_map(|(pattern, confidence)| {
            let caps = pattern().captures(text)?;
            let amount = Decimal::from_str(caps.get(1)?.as_str()).ok()?;
            let unit = VolumeUnit::from_str(caps.get(2)?.as_str()).ok()?;
            Some(
                Extraction::found(caps.get(0)?.as_str().trim(), *confidence)
                    .with_parsed(NetContents::new(amount, unit)),
            )
        })
    }

    /// A standard size printed without its unit, accepted only next to a
    /// plausible ABV that is not the same number.
    fn net_from_bare_size(&self, text: &str) -> Option<Extraction<NetContents>> {
        let size = *self
            .vocabulary
            .bottle_sizes_ml
            .iter()
            .find(|size| has_bare_number(text, **size))?;
        let abv = stated_abv(text)?;

        let plausible = abv >= Decimal::from(MIN_INFERRED_ABV) && abv <= Decimal::from(MAX_INFERRED_ABV);
        (plausible && abv != Decimal::from(size)).then(|| size_result(size, 0.55))
    }

    /// Reached only when no unit statement was found and no bare size passed
    /// the ABV guard.
    fn net_from_spirit_default(&self, text: &str) -> Option<Extraction<NetContents>> {
        let abv = stated_abv(text)?;
        let normalized = normalize_text(text);
        let is_spirit = self
            .vocabulary
            .spirit_keywords
            .iter()
            .any(|k| contains_words(&normalized, k));

        (is_spirit && abv >= Decimal::from(STANDARD_BOTTLE_ABV)).then(|| size_result(STANDARD_BOTTLE_ML, 0.4))
    }
}
