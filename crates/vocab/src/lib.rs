//! Charvocab - character vocabularies for speech recognition
//!
//! This crate reads training manifests, counts every character in their
//! transcripts and writes the characters that reach a count threshold to a
//! vocabulary file, most frequent first.
//!
//! # Example
//!
//! ```rust,no_run
//! use charvocab::{build_vocab, ManifestFormat, VocabConfig};
//!
//! let config = VocabConfig::builder()
//!     .manifest_paths(["train.json", "dev.json"])
//!     .file_type(ManifestFormat::Json)
//!     .count_threshold(2)
//!     .vocab_path("data/vocab.txt")
//!     .build()?;
//!
//! let summary = build_vocab(config)?;
//! println!("{} characters written", summary.vocab.len());
//! # Ok::<(), charvocab::VocabError>(())
//! ```

pub use charvocab_core::{
    CharCount, CharFrequencies, DurationBounds, Manifest, ManifestFormat, ManifestReader,
    ManifestRecord, Result, SkipReason, Transcript, VocabError,
};

pub mod build;
pub use build::{
    build_vocab, truncate, BuildSummary, CharCounter, CountStats, RecordOutcome, SkippedRecord,
    VocabBuilder, VocabConfig, VocabConfigBuilder, VocabWriter, DEFAULT_VOCAB_PATH,
};
