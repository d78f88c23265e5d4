//! Error types for the vocabulary builder.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vocabulary builder.
///
/// Every variant is fatal: the run stops and nothing is written. Records whose
/// text cannot be counted are not errors, see `SkipReason`.
#[derive(Error, Debug)]
pub enum VocabError {
    /// A manifest line or row does not have the expected shape
    #[error("Error reading manifest {path} at line {line}: {message}")]
    ManifestParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// I/O error while reading a manifest
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Error creating, writing or renaming the vocabulary file
    #[error("Failed to write vocabulary {path}: {err}")]
    Write {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Character that cannot be stored as a single vocabulary line
    #[error("Character {ch:?} cannot be written as a vocabulary line")]
    UnwritableChar { ch: char },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl VocabError {
    pub(crate) fn parse(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Why a record contributed nothing to the frequency table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The record has no text field, or it is empty in a CSV row
    #[error("text field is missing")]
    MissingText,

    /// The text field holds something other than a string
    #[error("text field is not a string (found {found})")]
    InvalidText { found: String },
}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
