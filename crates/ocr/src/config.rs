use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recognizer::PageSegMode;
use crate::vocab::Vocabulary;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for the label pipeline. Every key is optional in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// OCR passes run per image, in merge order.
    pub passes: Vec<PageSegMode>,
    /// Characters of merged OCR text echoed in a report.
    pub raw_text_limit: usize,
    pub vocabulary: Vocabulary,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            passes: vec![PageSegMode::SINGLE_BLOCK, PageSegMode::AUTO],
            raw_text_limit: 1000,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.passes.is_empty() {
            return Err(ConfigError::Invalid("at least one OCR pass is required".into()));
        }
        if let Some(mode) = self.passes.iter().find(|m| !m.is_valid()) {
            return Err(ConfigError::Invalid(format!(
                "page segmentation mode {} is out of range 0-{}",
                mode.0,
                PageSegMode::MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = PipelineConfig::from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.passes, vec![PageSegMode(6), PageSegMode(3)]);
        assert_eq!(config.raw_text_limit, 1000);
    }

    #[test]
    fn overrides_passes_and_vocabulary() {
        let config = PipelineConfig::from_toml(
            r#"
            passes = [11]
            raw_text_limit = 50

            [vocabulary]
            spirit_keywords = ["mezcal"]
            "#,
        )
        .unwrap();
        assert_eq!(config.passes, vec![PageSegMode::SPARSE_TEXT]);
        assert_eq!(config.raw_text_limit, 50);
        assert_eq!(config.vocabulary.spirit_keywords, vec!["mezcal".to_string()]);
        assert_eq!(config.vocabulary.bottle_sizes_ml, vec![750, 1000, 1750, 375, 200]);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(PipelineConfig::from_toml("passes = []"), Err(ConfigError::Invalid(_))));
        assert!(matches!(PipelineConfig::from_toml("passes = [14]"), Err(ConfigError::Invalid(_))));
        assert!(matches!(PipelineConfig::from_toml("passes = \"six\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "passes = [4, 6]").unwrap();
        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.passes, vec![PageSegMode(4), PageSegMode(6)]);

        let missing = PipelineConfig::load(Path::new("/nonexistent/labelcheck.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
