use chrono::{DateTime, Utc};
use labelcheck_core::{
    Abv, BatchSummary, Extraction, FieldResult, FieldStatus, ImageSummary, NetContents,
};
use serde::{Deserialize, Serialize};

/// Everything the extractors pulled out of one label's text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFields {
    pub brand_name: Extraction,
    pub class_type: Extraction,
    pub alcohol_content: Extraction<Abv>,
    pub net_contents: Extraction<NetContents>,
    pub government_warning: Extraction,
    /// Reported for reviewers; not counted toward compliance.
    pub bottler_producer: Extraction,
    /// Reported for reviewers; not counted toward compliance.
    pub country_of_origin: Extraction,
}

impl LabelFields {
    /// Statuses of the five mandatory fields.
    pub fn required_statuses(&self) -> [FieldStatus; 5] {
        [
            self.brand_name.status(),
            self.class_type.status(),
            self.alcohol_content.status(),
            self.net_contents.status(),
            self.government_warning.status(),
        ]
    }

    pub fn summary(&self) -> ImageSummary {
        ImageSummary::from_statuses(self.required_statuses())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResults {
    pub brand_name: FieldResult,
    pub class_type: FieldResult,
    pub alcohol_content: FieldResult<Abv>,
    pub net_contents: FieldResult<NetContents>,
    pub government_warning: FieldResult,
    pub bottler_producer: FieldResult,
    pub country_of_origin: FieldResult,
}

impl From<LabelFields> for FieldResults {
    fn from(f: LabelFields) -> Self {
        Self {
            brand_name: f.brand_name.into(),
            class_type: f.class_type.into(),
            alcohol_content: f.alcohol_content.into(),
            net_contents: f.net_contents.into(),
            government_warning: f.government_warning.into(),
            bottler_producer: f.bottler_producer.into(),
            country_of_origin: f.country_of_origin.into(),
        }
    }
}

/// A flattened, type-erased view of one field for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRow<'a> {
    pub name: &'static str,
    pub status: FieldStatus,
    pub value: Option<&'a str>,
    pub confidence: f32,
    pub issues: &'a [String],
}

impl FieldResults {
    pub fn rows(&self) -> [FieldRow<'_>; 7] {
        fn row<'a, P>(name: &'static str, r: &'a FieldResult<P>) -> FieldRow<'a> {
            FieldRow {
                name,
                status: r.status,
                value: r.value.as_deref(),
                confidence: r.confidence,
                issues: &r.issues,
            }
        }
        [
            row("brand_name", &self.brand_name),
            row("class_type", &self.class_type),
            row("alcohol_content", &self.alcohol_content),
            row("net_contents", &self.net_contents),
            row("government_warning", &self.government_warning),
            row("bottler_producer", &self.bottler_producer),
            row("country_of_origin", &self.country_of_origin),
        ]
    }
}

/// Outcome of checking one label image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelReport {
    pub filename: String,
    pub processing_time_ms: u64,
    pub processed_at: DateTime<Utc>,
    /// Merged OCR text, truncated for transport. `None` when OCR produced nothing.
    pub raw_text: Option<String>,
    pub fields: FieldResults,
    pub summary: ImageSummary,
}

impl LabelReport {
    pub fn is_compliant(&self) -> bool {
        self.summary.is_compliant
    }
}

/// An input that could not be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFailure {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<LabelReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ImageFailure>,
    pub batch_summary: BatchSummary,
}

impl BatchReport {
    pub fn new(results: Vec<LabelReport>, failures: Vec<ImageFailure>) -> Self {
        let batch_summary = BatchSummary::from_summaries(results.iter().map(|r| &r.summary));
        Self { results, failures, batch_summary }
    }
}
