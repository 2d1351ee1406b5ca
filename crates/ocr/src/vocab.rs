//! Fixed word lists the extractors consult. Every table can be replaced from
//! configuration; `Vocabulary::default()` carries the built-in lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Statutory health warning required on US alcohol labels (27 CFR 16.21).
pub const REQUIRED_WARNING: &str = "GOVERNMENT WARNING: (1) According to the Surgeon General, \
women should not drink alcoholic beverages during pregnancy because of the risk of birth \
defects. (2) Consumption of alcoholic beverages impairs your ability to drive a car or \
operate machinery, and may cause health problems.";

/// A brand recognised by pattern. Without a display name the matched text is
/// title-cased and reported at a lower confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownBrand {
    /// Regular expression, matched case-insensitively against each line.
    pub pattern: String,
    #[serde(default)]
    pub display: Option<String>,
}

impl KnownBrand {
    fn named(pattern: &str, display: &str) -> Self {
        Self { pattern: pattern.to_string(), display: Some(display.to_string()) }
    }
}

/// A spelling of a country as it appears on labels (normalized form) and the
/// name to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAlias {
    pub alias: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub known_brands: Vec<KnownBrand>,
    /// Lowercase words that never make a line look like a brand name.
    pub brand_stop_words: BTreeSet<String>,
    pub beverage_types: Vec<String>,
    /// Keywords that mark a label as a distilled spirit.
    pub spirit_keywords: Vec<String>,
    /// Standard US bottle sizes in mL, most common first.
    pub bottle_sizes_ml: Vec<u32>,
    /// Normalized header spellings, including single-letter OCR drops.
    pub warning_headers: Vec<String>,
    pub required_warning: String,
    pub countries: Vec<CountryAlias>,
    /// Lowercase state names that imply a US origin.
    pub us_states: Vec<String>,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            known_brands: vec![
                KnownBrand::named(r"HIGH\s*RIDGE", "High Ridge"),
                KnownBrand::named(r"RIVER\s*BEND", "River Bend"),
                KnownBrand::named(r"PRAIRIE\s*BEND", "Prairie Bend"),
                KnownBrand::named(r"MOUNTAIN\s*PASS", "Mountain Pass"),
                KnownBrand::named(r"SILVER\s*CREEK", "Silver Creek"),
                KnownBrand::named(r"JACK\s*DANIELS?", "Jack Daniel's"),
                KnownBrand::named(r"WILD\s*TURKEY", "Wild Turkey"),
                KnownBrand::named(r"JIM\s*BEAM", "Jim Beam"),
                KnownBrand::named(r"BLUE\s*RIDGE", "Blue Ridge"),
                KnownBrand { pattern: r"\bOLD\s*\w+".to_string(), display: None },
            ],
            brand_stop_words: [
                "small", "batch", "straight", "product", "usa", "aged", "years", "bottled",
                "distilled", "government", "warning", "according", "surgeon", "general",
                "women", "consumption", "alcohol", "alc", "vol", "ml", "proof", "%", "bourbon",
                "whiskey", "whisky", "vodka", "gin", "rum", "tequila", "evansville", "indiana",
                "co",
            ]
            .iter()
            .map(|w| w.to_string())
            .collect(),
            beverage_types: strings(&[
                "bourbon", "whiskey", "whisky", "vodka", "gin", "rum", "tequila", "brandy",
                "wine", "beer", "cordial", "liqueur", "liquor", "cognac", "scotch", "rye",
                "moonshine", "sake", "vermouth", "absinthe",
            ]),
            spirit_keywords: strings(&[
                "bourbon", "whiskey", "whisky", "vodka", "gin", "rum", "tequila", "brandy",
            ]),
            bottle_sizes_ml: vec![750, 1000, 1750, 375, 200],
            warning_headers: strings(&[
                "government warning",
                "govemment warning",
                "goverment warning",
                "governnent warning",
                "governmert warning",
            ]),
            required_warning: REQUIRED_WARNING.to_string(),
            countries: [
                ("united states", "USA"),
                ("usa", "USA"),
                ("u s a", "USA"),
                ("america", "USA"),
                ("united kingdom", "UK"),
                ("uk", "UK"),
                ("canada", "Canada"),
                ("mexico", "Mexico"),
                ("france", "France"),
                ("italy", "Italy"),
                ("spain", "Spain"),
                ("ireland", "Ireland"),
                ("japan", "Japan"),
                ("scotland", "Scotland"),
            ]
            .iter()
            .map(|(alias, country)| CountryAlias {
                alias: alias.to_string(),
                country: country.to_string(),
            })
            .collect(),
            us_states: strings(&[
                "kentucky", "tennessee", "indiana", "kansas", "california", "new york", "texas",
                "florida", "ohio", "pennsylvania", "illinois", "georgia", "virginia", "oregon",
                "washington", "colorado", "missouri", "wisconsin", "michigan",
            ]),
        }
    }
}

impl Vocabulary {
    pub fn is_brand_stop_word(&self, word: &str) -> bool {
        self.brand_stop_words.contains(&word.to_lowercase())
    }

    /// Reported name for a normalized country spelling, if it is a known alias.
    pub fn country_for(&self, normalized: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.alias == normalized)
            .map(|c| c.country.as_str())
    }
}
