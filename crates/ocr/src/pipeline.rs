use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::extract::Extractor;
use crate::merge::merge_transcriptions;
use crate::recognizer::{OcrBackend, PageSegMode};
use crate::types::{BatchReport, ImageFailure, LabelReport};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Orchestrates: OCR passes → merge → extract → classify → summarise.
pub struct LabelPipeline<R: OcrBackend> {
    recognizer: R,
    extractor: Extractor,
    passes: Vec<PageSegMode>,
    raw_text_limit: usize,
}

/// Name a report after the file, falling back to the whole path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl<R: OcrBackend> LabelPipeline<R> {
    pub fn new(recognizer: R, config: PipelineConfig) -> Self {
        Self {
            recognizer,
            extractor: Extractor::new(config.vocabulary),
            passes: config.passes,
            raw_text_limit: config.raw_text_limit,
        }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Build a report from transcriptions that were produced elsewhere.
    pub fn analyze_text<S: AsRef<str>>(&self, filename: &str, transcriptions: &[S]) -> LabelReport {
        self.report(filename, transcriptions, Instant::now())
    }

    /// Run every configured OCR pass over `image_bytes` and report on the
    /// merged text. Failed passes are skipped; if all fail the report has
    /// every field missing.
    pub fn process_bytes(&self, filename: &str, image_bytes: &[u8]) -> LabelReport {
        let started = Instant::now();
        let transcriptions: Vec<String> = self
            .passes
            .iter()
            .filter_map(|mode| match self.recognizer.recognize(image_bytes, *mode) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!(filename, %mode, "OCR pass failed: {e}");
                    None
                }
            })
            .collect();
        self.report(filename, &transcriptions, started)
    }

    /// Process a file on disk.
    pub async fn process_file(&self, path: &Path) -> Result<LabelReport, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(self.process_bytes(&display_name(path), &bytes))
    }

    fn report<S: AsRef<str>>(&self, filename: &str, transcriptions: &[S], started: Instant) -> LabelReport {
        let merged = merge_transcriptions(transcriptions);
        let fields = self.extractor.extract(&merged);
        let summary = fields.summary();
        let raw_text = (!merged.trim().is_empty())
            .then(|| merged.chars().take(self.raw_text_limit).collect::<String>());
        let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::info!(
            filename,
            detected = summary.detected,
            missing = summary.missing,
            formatting_issues = summary.formatting_issues,
            compliant = summary.is_compliant,
            processing_time_ms,
            "label processed"
        );

        LabelReport {
            filename: filename.to_string(),
            processing_time_ms,
            processed_at: Utc::now(),
            raw_text,
            fields: fields.into(),
            summary,
        }
    }
}

impl<R: OcrBackend + 'static> LabelPipeline<R> {
    /// Process several images concurrently. Reports keep input order;
    /// unreadable inputs become failures and are left out of the summary.
    pub async fn process_batch(self: Arc<Self>, paths: Vec<PathBuf>) -> BatchReport {
        let tasks: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let filename = display_name(&path);
                let pipeline = Arc::clone(&self);
                let name = filename.clone();
                let task = tokio::spawn(async move {
                    let bytes = tokio::fs::read(&path).await?;
                    let report =
                        tokio::task::spawn_blocking(move || pipeline.process_bytes(&name, &bytes)).await?;
                    Ok::<_, PipelineError>(report)
                });
                (filename, task)
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        let mut failures = Vec::new();
        for (filename, task) in tasks {
            match task.await.map_err(PipelineError::from).and_then(|r| r) {
                Ok(report) => results.push(report),
                Err(e) => {
                    tracing::warn!(filename = %filename, "label could not be processed: {e}");
                    failures.push(ImageFailure { filename, error: e.to_string() });
                }
            }
        }

        let batch = BatchReport::new(results, failures);
        tracing::info!(
            total = batch.batch_summary.total_images,
            compliant = batch.batch_summary.fully_compliant,
            failed = batch.failures.len(),
            "batch processed"
        );
        batch
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
