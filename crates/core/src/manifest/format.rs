//! Manifest formats and duration filtering.

use crate::error::{Result, VocabError};
use std::fmt;
use std::str::FromStr;

/// On-disk layout of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    /// Header row, then `audio_filepath;duration;text` rows
    #[default]
    Csv,
    /// One JSON object per line
    Json,
}

impl ManifestFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestFormat {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(VocabError::InvalidConfig(format!(
                "unknown manifest file type '{}' (expected csv or json)",
                other
            ))),
        }
    }
}

/// Inclusive `[min, max]` range of clip durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationBounds {
    min: f64,
    max: f64,
}

impl DurationBounds {
    /// Create bounds, rejecting NaN and inverted ranges.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(VocabError::InvalidConfig(
                "duration bounds must be numbers".to_string(),
            ));
        }
        if min > max {
            return Err(VocabError::InvalidConfig(format!(
                "min_duration {} is greater than max_duration {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether a clip of `duration` seconds passes the filter.
    pub fn contains(&self, duration: f64) -> bool {
        self.min <= duration && duration <= self.max
    }
}

impl Default for DurationBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}
