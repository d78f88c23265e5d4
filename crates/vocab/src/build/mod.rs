//! Vocabulary building.
//!
//! This module wires manifest reading, character counting and vocabulary
//! output into a single pass.

pub mod builder;
pub mod config;
pub mod counter;
pub mod writer;

pub use builder::{build_vocab, BuildSummary, VocabBuilder};
pub use config::{VocabConfig, VocabConfigBuilder, DEFAULT_VOCAB_PATH};
pub use counter::{CharCounter, CountStats, RecordOutcome, SkippedRecord};
pub use writer::{truncate, VocabWriter};
