use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available; build with the `tesseract` feature")]
    NotAvailable,
}

/// Tesseract page segmentation mode (`--psm`), 0 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSegMode(pub u8);

impl PageSegMode {
    /// Fully automatic layout analysis.
    pub const AUTO: PageSegMode = PageSegMode(3);
    /// One uniform block of text.
    pub const SINGLE_BLOCK: PageSegMode = PageSegMode(6);
    pub const SPARSE_TEXT: PageSegMode = PageSegMode(11);
    pub const MAX: u8 = 13;

    pub fn is_valid(self) -> bool {
        self.0 <= Self::MAX
    }
}

impl fmt::Display for PageSegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--psm {}", self.0)
    }
}

/// Abstraction over an OCR backend.
/// Implementations accept raw PNG/JPEG image bytes and return the text read
/// under one page segmentation mode.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8], mode: PageSegMode) -> Result<String, OcrError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns preset text without looking at the image, optionally a different
/// transcription per mode. Modes without an entry fail like a broken pass.
pub struct MockRecognizer {
    default: Option<String>,
    per_mode: Vec<(PageSegMode, String)>,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { default: Some(text.into()), per_mode: Vec::new() }
    }

    pub fn per_mode<S: Into<String>>(passes: impl IntoIterator<Item = (PageSegMode, S)>) -> Self {
        Self {
            default: None,
            per_mode: passes.into_iter().map(|(mode, text)| (mode, text.into())).collect(),
        }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image_bytes: &[u8], mode: PageSegMode) -> Result<String, OcrError> {
        self.per_mode
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, text)| text.clone())
            .or_else(|| self.default.clone())
            .ok_or_else(|| OcrError::Engine(format!("no transcription for {mode}")))
    }
}

/// Stand-in for builds without an OCR engine. Every pass fails, so only
/// transcriptions produced elsewhere can be checked.
pub struct UnavailableRecognizer;

impl OcrBackend for UnavailableRecognizer {
    fn recognize(&self, _image_bytes: &[u8], _mode: PageSegMode) -> Result<String, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError, PageSegMode};
    use leptess::{LepTess, Variable};

    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn recognize(&self, image_bytes: &[u8], mode: PageSegMode) -> Result<String, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_variable(Variable::TesseditPagesegMode, &mode.0.to_string())
                .map_err(|_| OcrError::Engine(format!("cannot set {mode}")))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}
