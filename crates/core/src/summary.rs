use serde::{Deserialize, Serialize};

use crate::field::FieldStatus;

/// Per-image tally of field states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub detected: usize,
    pub missing: usize,
    pub formatting_issues: usize,
    pub is_compliant: bool,
}

impl ImageSummary {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = FieldStatus>,
    {
        let (detected, missing, formatting_issues) =
            statuses.into_iter().fold((0, 0, 0), |(d, m, f), status| match status {
                FieldStatus::Detected => (d + 1, m, f),
                FieldStatus::Missing => (d, m + 1, f),
                FieldStatus::FormattingIssue => (d, m, f + 1),
            });

        Self {
            detected,
            missing,
            formatting_issues,
            is_compliant: missing == 0 && formatting_issues == 0,
        }
    }

    pub fn total_fields(&self) -> usize {
        self.detected + self.missing + self.formatting_issues
    }
}

/// Roll-up over every image that was processed successfully in one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_images: usize,
    pub fully_compliant: usize,
    pub needs_review: usize,
}

impl BatchSummary {
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a ImageSummary>,
    {
        let (total_images, fully_compliant) = summaries
            .into_iter()
            .fold((0, 0), |(t, c), s| (t + 1, c + usize::from(s.is_compliant)));

        Self {
            total_images,
            fully_compliant,
            needs_review: total_images - fully_compliant,
        }
    }
}
