pub mod config;
pub mod extract;
pub mod fuzzy;
pub mod merge;
pub mod pipeline;
pub mod recognizer;
pub mod text;
pub mod types;
pub mod util;
pub mod vocab;

pub use config::{ConfigError, PipelineConfig};
pub use extract::{warning_confidence, Extractor, WarningSignals};
pub use merge::merge_transcriptions;
pub use pipeline::{LabelPipeline, PipelineError};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError, PageSegMode, UnavailableRecognizer};
pub use text::normalize_text;
pub use types::{BatchReport, FieldResults, FieldRow, ImageFailure, LabelFields, LabelReport};
pub use vocab::{Vocabulary, REQUIRED_WARNING};
