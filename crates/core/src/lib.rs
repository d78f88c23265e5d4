//! Charvocab-core - manifest parsing and character counting primitives
//!
//! This crate provides the data structures shared by the vocabulary builder:
//! manifest records and readers, duration filtering, the character frequency
//! table and the error taxonomy.
//!
//! # Example
//!
//! ```rust,no_run
//! use charvocab_core::{CharFrequencies, DurationBounds, ManifestFormat, ManifestReader};
//! use std::path::Path;
//!
//! let reader = ManifestReader::new(ManifestFormat::Json, DurationBounds::default());
//! let manifest = reader.read(Path::new("train.json"))?;
//!
//! let mut table = CharFrequencies::new();
//! for record in &manifest.records {
//!     if let Ok(chars) = record.text.chars() {
//!         table.extend(chars);
//!     }
//! }
//! # Ok::<(), charvocab_core::VocabError>(())
//! ```

pub mod error;
pub use error::{Result, SkipReason, VocabError};

pub mod manifest;
pub use manifest::{
    DurationBounds, Manifest, ManifestFormat, ManifestReader, ManifestRecord, Transcript,
};

pub mod frequency;
pub use frequency::{CharCount, CharFrequencies};
