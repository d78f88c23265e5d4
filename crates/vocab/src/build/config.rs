//! Configuration for a vocabulary build.

use charvocab_core::{DurationBounds, ManifestFormat, Result, VocabError};
use std::path::PathBuf;

/// Default output path for the vocabulary file.
pub const DEFAULT_VOCAB_PATH: &str = "data/librispeech/vocab.txt";

/// Configuration for a vocabulary build.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabConfig {
    /// Manifests to read, processed in this order
    pub manifest_paths: Vec<PathBuf>,
    /// Format shared by every manifest
    pub file_type: ManifestFormat,
    /// Minimum count for a character to be kept
    pub count_threshold: u64,
    /// Output file
    pub vocab_path: PathBuf,
    /// Records outside these bounds are ignored
    pub duration: DurationBounds,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            manifest_paths: Vec::new(),
            file_type: ManifestFormat::default(),
            count_threshold: 0,
            vocab_path: PathBuf::from(DEFAULT_VOCAB_PATH),
            duration: DurationBounds::default(),
        }
    }
}

impl VocabConfig {
    /// Create a builder with default settings.
    pub fn builder() -> VocabConfigBuilder {
        VocabConfigBuilder::new()
    }
}

/// Builder for `VocabConfig`.
#[derive(Debug, Clone)]
pub struct VocabConfigBuilder {
    config: VocabConfig,
    min_duration: f64,
    max_duration: f64,
}

impl Default for VocabConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabConfigBuilder {
    pub fn new() -> Self {
        let config = VocabConfig::default();
        Self {
            min_duration: config.duration.min(),
            max_duration: config.duration.max(),
            config,
        }
    }

    /// Append one manifest path.
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.manifest_paths.push(path.into());
        self
    }

    /// Append several manifest paths, keeping their order.
    pub fn manifest_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config
            .manifest_paths
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn file_type(mut self, file_type: ManifestFormat) -> Self {
        self.config.file_type = file_type;
        self
    }

    pub fn count_threshold(mut self, threshold: u64) -> Self {
        self.config.count_threshold = threshold;
        self
    }

    pub fn vocab_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.vocab_path = path.into();
        self
    }

    pub fn min_duration(mut self, seconds: f64) -> Self {
        self.min_duration = seconds;
        self
    }

    pub fn max_duration(mut self, seconds: f64) -> Self {
        self.max_duration = seconds;
        self
    }

    /// Validate and build the configuration.
    pub fn build(mut self) -> Result<VocabConfig> {
        if self.config.vocab_path.as_os_str().is_empty() {
            return Err(VocabError::InvalidConfig(
                "vocab_path must not be empty".to_string(),
            ));
        }
        self.config.duration = DurationBounds::new(self.min_duration, self.max_duration)?;
        Ok(self.config)
    }
}
