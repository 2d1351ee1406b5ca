//! Text canonicalisation shared by the matchers and extractors.

/// Lowercase, turn every character that is not a letter, digit or whitespace
/// into a space, collapse whitespace runs and trim.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep only the characters `keep` accepts.
pub(crate) fn keep_chars(text: &str, keep: impl Fn(char) -> bool) -> String {
    text.chars().filter(|c| keep(*c)).collect()
}

/// Drop every character that is not a letter, digit or whitespace.
pub(crate) fn strip_punctuation(text: &str) -> String {
    keep_chars(text, |c| c.is_alphanumeric() || c.is_whitespace())
}

/// First letter upper, rest lower.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-separated word and rejoin with single spaces.
pub(crate) fn title_words(text: &str) -> String {
    text.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace runs (including newlines) to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Non-empty, trimmed lines in order.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Whether `phrase` (already normalized) occurs in `normalized` on word boundaries.
pub(crate) fn contains_words(normalized: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    format!(" {normalized} ").contains(&format!(" {phrase} "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize_text("GOVERNMENT WARNING: (1)"), "government warning 1");
        assert_eq!(normalize_text("45% Alc./Vol."), "45 alc vol");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  High\n\n  Ridge\t Distilling  "), "high ridge distilling");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("!!!  ---"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in [
            "GOVERNMENT WARNING: (1) According to the Surgeon General",
            "750mL / 45% ALC/VOL",
            "Jack Daniel's Old No. 7",
            "  \t\n",
            "under_score and CAFÉ",
        ] {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn keep_chars_applies_predicate() {
        assert_eq!(strip_punctuation("Jack Daniel's No. 7"), "Jack Daniels No 7");
        assert_eq!(keep_chars("Co. #12", |c| c.is_ascii_alphabetic() || c == '.'), "Co.");
    }

    #[test]
    fn title_words_capitalizes_each_word() {
        assert_eq!(title_words("HIGH  RIDGE\ndistilling co"), "High Ridge Distilling Co");
    }

    #[test]
    fn contains_words_respects_boundaries() {
        assert!(contains_words("product of new york", "new york"));
        assert!(!contains_words("american oak", "america"));
        assert!(!contains_words("duke", "uk"));
        assert!(!contains_words("anything", ""));
    }
}
