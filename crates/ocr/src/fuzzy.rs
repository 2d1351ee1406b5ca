//! Approximate phrase containment over OCR text.
//!
//! Scores are on a 0–100 scale: identical strings score 100, strings with
//! nothing in common score 0. The score is derived from the insertion/deletion
//! edit distance, so it falls monotonically as edits accumulate.

use crate::util::indel_distance;

/// Threshold used when a caller has no field-specific preference.
pub const DEFAULT_THRESHOLD: f32 = 75.0;

/// Similarity of two strings on a 0–100 scale. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f32 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    100.0 * (1.0 - indel_distance(a, b) as f32 / total as f32)
}

/// True when `pattern` appears verbatim (ignoring case) in `text`, or when any
/// run of consecutive words in `text` as wide as `pattern` scores at least
/// `threshold` against it. A threshold of 100 or more accepts verbatim
/// occurrences only.
pub fn contains(text: &str, pattern: &str, threshold: f32) -> bool {
    if text.is_empty() || pattern.is_empty() {
        return false;
    }

    let text = text.to_lowercase();
    let pattern = pattern.to_lowercase();

    if text.contains(&pattern) {
        return true;
    }
    if threshold >= 100.0 {
        return false;
    }

    let pattern_words: Vec<&str> = pattern.split_whitespace().collect();
    if pattern_words.is_empty() {
        return false;
    }
    let target = pattern_words.join(" ");

    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .windows(pattern_words.len())
        .any(|window| ratio(&window.join(" "), &target) >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_identical_is_100() {
        assert_eq!(ratio("bourbon", "bourbon"), 100.0);
        assert_eq!(ratio("", ""), 100.0);
    }

    #[test]
    fn ratio_disjoint_is_zero() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn ratio_decreases_with_edits() {
        let one = ratio("surgeon", "surgaon");
        let two = ratio("surgeon", "surgaan");
        assert!(one > two, "{one} vs {two}");
    }

    #[test]
    fn verbatim_match_ignores_case() {
        assert!(contains("GOVERNMENT WARNING: ...", "government warning", 100.0));
    }

    #[test]
    fn tolerates_single_character_misread() {
        assert!(contains("according to the surgaon general", "surgeon", DEFAULT_THRESHOLD));
        assert!(contains("according to the surgaon generai", "surgeon general", 70.0));
    }

    #[test]
    fn rejects_unrelated_text() {
        assert!(!contains("small batch kentucky bourbon", "pregnancy", 70.0));
        assert!(!contains("distilled in indiana", "operate machinery", 70.0));
    }

    #[test]
    fn threshold_100_means_verbatim_only() {
        assert!(!contains("the surgaon general", "surgeon", 100.0));
        assert!(contains("the surgeon general", "surgeon", 100.0));
    }

    #[test]
    fn threshold_100_does_not_forgive_spacing() {
        assert!(!contains("surgeon\ngeneral", "surgeon general", 100.0));
        assert!(!contains("surgeon  general", "surgeon general", 100.0));
        assert!(contains("the Surgeon General", "surgeon general", 100.0));
        // Below 100 the windows still absorb spacing differences.
        assert!(contains("surgeon\ngeneral", "surgeon general", 99.0));
    }

    #[test]
    fn pattern_wider_than_text_does_not_match() {
        assert!(!contains("drive", "operate heavy machinery", 70.0));
    }

    #[test]
    fn empty_inputs_never_match() {
        assert!(!contains("", "drive", 0.0));
        assert!(!contains("drive", "", 0.0));
        assert!(!contains("drive", "   ", 0.0));
    }
}
