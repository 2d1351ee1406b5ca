use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a single label field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Detected,
    Missing,
    FormattingIssue,
}

impl FieldStatus {
    /// Missing when nothing was found, a formatting issue when something was
    /// found but flagged, detected otherwise.
    pub fn classify(value: Option<&str>, issues: &[String]) -> Self {
        match value {
            None => FieldStatus::Missing,
            Some(_) if !issues.is_empty() => FieldStatus::FormattingIssue,
            Some(_) => FieldStatus::Detected,
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Detected => write!(f, "detected"),
            FieldStatus::Missing => write!(f, "missing"),
            FieldStatus::FormattingIssue => write!(f, "formatting_issue"),
        }
    }
}

/// What an extractor produced for one field.
///
/// `value` is the text as it appeared on the label (or a display form of it),
/// `parsed` an optional structured reading of that text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction<P = ()> {
    pub value: Option<String>,
    pub parsed: Option<P>,
    /// Confidence in this extraction (0.0 = nothing found, 1.0 = certain).
    pub confidence: f32,
    pub issues: Vec<String>,
}

impl<P> Extraction<P> {
    pub fn missing() -> Self {
        Self { value: None, parsed: None, confidence: 0.0, issues: Vec::new() }
    }

    pub fn found(value: impl Into<String>, confidence: f32) -> Self {
        Self {
            value: Some(value.into()),
            parsed: None,
            confidence: confidence.clamp(0.0, 1.0),
            issues: Vec::new(),
        }
    }

    pub fn with_parsed(mut self, parsed: P) -> Self {
        self.parsed = Some(parsed);
        self
    }

    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = issues;
        self
    }

    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }

    pub fn status(&self) -> FieldStatus {
        FieldStatus::classify(self.value.as_deref(), &self.issues)
    }
}

/// A classified extraction, as handed to reviewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult<P = ()> {
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_value: Option<P>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    pub confidence: f32,
}

impl<P> From<Extraction<P>> for FieldResult<P> {
    fn from(e: Extraction<P>) -> Self {
        FieldResult {
            status: e.status(),
            value: e.value,
            parsed_value: e.parsed,
            issues: e.issues,
            confidence: e.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_missing_when_no_value() {
        assert_eq!(FieldStatus::classify(None, &[]), FieldStatus::Missing);
        // Issues without a value still count as missing.
        let issues = vec!["Government Warning not found".to_string()];
        assert_eq!(FieldStatus::classify(None, &issues), FieldStatus::Missing);
    }

    #[test]
    fn classify_formatting_issue_when_value_has_issues() {
        let issues = vec!["Header should be 'GOVERNMENT WARNING:' in ALL CAPS".to_string()];
        assert_eq!(
            FieldStatus::classify(Some("Government Warning: ..."), &issues),
            FieldStatus::FormattingIssue
        );
    }

    #[test]
    fn classify_detected_when_clean() {
        assert_eq!(FieldStatus::classify(Some("750 mL"), &[]), FieldStatus::Detected);
    }

    #[test]
    fn status_display_matches_json() {
        for status in [FieldStatus::Detected, FieldStatus::Missing, FieldStatus::FormattingIssue] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&FieldStatus::FormattingIssue).unwrap();
        assert_eq!(json, "\"formatting_issue\"");
    }

    #[test]
    fn found_clamps_confidence() {
        let e: Extraction = Extraction::found("x", 1.4);
        assert_eq!(e.confidence, 1.0);
        let e: Extraction = Extraction::found("x", -0.2);
        assert_eq!(e.confidence, 0.0);
    }

    #[test]
    fn missing_has_zero_confidence() {
        let e: Extraction<u32> = Extraction::missing();
        assert!(!e.is_found());
        assert_eq!(e.confidence, 0.0);
        assert_eq!(e.status(), FieldStatus::Missing);
    }

    #[test]
    fn field_result_from_extraction() {
        let e = Extraction::found("45% Alc./Vol.", 0.95).with_parsed(45u32);
        let r: FieldResult<u32> = e.into();
        assert_eq!(r.status, FieldStatus::Detected);
        assert_eq!(r.value.as_deref(), Some("45% Alc./Vol."));
        assert_eq!(r.parsed_value, Some(45));
    }

    #[test]
    fn field_result_omits_empty_parts_in_json() {
        let r: FieldResult = Extraction::<()>::missing().into();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["status"], "missing");
        assert!(json.get("value").is_none());
        assert!(json.get("issues").is_none());
    }

    #[test]
    fn field_result_reads_back_without_optional_parts() {
        let r: FieldResult<u32> = serde_json::from_str(r#"{"status":"missing","confidence":0.0}"#).unwrap();
        assert_eq!(r.value, None);
        assert_eq!(r.parsed_value, None);
        assert!(r.issues.is_empty());
    }
}
