//! Character counting over manifest records.
//!
//! Counting is best-effort per record: a record whose text cannot be
//! iterated is skipped and reported, and the run carries on.

use charvocab_core::{CharFrequencies, Manifest, ManifestRecord, SkipReason};
use std::path::PathBuf;

/// Result of counting a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record's characters were added; holds how many
    Counted(usize),
    /// The record contributed nothing
    Skipped(SkipReason),
}

/// A record left out of the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Manifest the record came from
    pub manifest: PathBuf,
    /// Position among the manifest's kept records (0-based)
    pub index: usize,
    /// Audio path of the record
    pub audio_filepath: String,
    pub reason: SkipReason,
}

/// Running totals for a counting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountStats {
    /// Records whose characters were counted
    pub records_counted: usize,
    /// Characters added across all counted records
    pub chars_counted: u64,
    /// Records that could not be counted
    pub skipped: Vec<SkippedRecord>,
}

impl CountStats {
    pub fn records_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Counter for character frequencies across manifests.
#[derive(Debug, Default)]
pub struct CharCounter {
    table: CharFrequencies,
    stats: CountStats,
}

impl CharCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every character of one record's text.
    ///
    /// Skipped records are not tallied in the stats; `count_manifest` does
    /// that with the manifest context attached.
    pub fn count_record(&mut self, record: &ManifestRecord) -> RecordOutcome {
        match record.text.chars() {
            Ok(chars) => {
                let mut n = 0;
                for ch in chars {
                    self.table.add(ch);
                    n += 1;
                }
                self.stats.records_counted += 1;
                self.stats.chars_counted += n as u64;
                RecordOutcome::Counted(n)
            }
            Err(reason) => RecordOutcome::Skipped(reason),
        }
    }

    /// Count all records of a manifest, in file order.
    ///
    /// Returns the number of records skipped in this manifest.
    pub fn count_manifest(&mut self, manifest: &Manifest) -> usize {
        let mut skipped = 0;

        for (index, record) in manifest.records.iter().enumerate() {
            match self.count_record(record) {
                RecordOutcome::Counted(n) => {
                    tracing::trace!(index, chars = n, "counted record");
                }
                RecordOutcome::Skipped(reason) => {
                    tracing::warn!(
                        manifest = %manifest.path.display(),
                        index,
                        audio = %record.audio_filepath,
                        %reason,
                        "skipping record"
                    );
                    self.stats.skipped.push(SkippedRecord {
                        manifest: manifest.path.clone(),
                        index,
                        audio_filepath: record.audio_filepath.clone(),
                        reason,
                    });
                    skipped += 1;
                }
            }
        }

        skipped
    }

    /// Get a reference to the frequency table.
    pub fn table(&self) -> &CharFrequencies {
        &self.table
    }

    /// Get a reference to the counting stats.
    pub fn stats(&self) -> &CountStats {
        &self.stats
    }

    /// Consume the counter, returning the table and stats.
    pub fn into_parts(self) -> (CharFrequencies, CountStats) {
        (self.table, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charvocab_core::Transcript;

    fn manifest(records: Vec<ManifestRecord>) -> Manifest {
        Manifest {
            path: PathBuf::from("train.json"),
            records,
            filtered_out: 0,
        }
    }

    #[test]
    fn test_count_record() {
        let mut counter = CharCounter::new();
        let outcome = counter.count_record(&ManifestRecord::new("a.wav", 1.0, "hi"));

        assert_eq!(outcome, RecordOutcome::Counted(2));
        assert_eq!(counter.table().get('h'), 1);
        assert_eq!(counter.table().get('i'), 1);
    }

    #[test]
    fn test_count_across_records() {
        let mut counter = CharCounter::new();
        let skipped = counter.count_manifest(&manifest(vec![
            ManifestRecord::new("a.wav", 1.0, "hi"),
            ManifestRecord::new("b.wav", 2.0, "hihi"),
        ]));

        assert_eq!(skipped, 0);
        assert_eq!(counter.table().get('h'), 3);
        assert_eq!(counter.table().get('i'), 3);
        assert_eq!(counter.stats().records_counted, 2);
        assert_eq!(counter.stats().chars_counted, 6);
    }

    #[test]
    fn test_skipped_record_does_not_abort() {
        let mut counter = CharCounter::new();
        let skipped = counter.count_manifest(&manifest(vec![
            ManifestRecord::new("a.wav", 1.0, "ab"),
            ManifestRecord::new("b.wav", 1.0, Transcript::Invalid("number".to_string())),
            ManifestRecord::new("c.wav", 1.0, Transcript::Missing),
            ManifestRecord::new("d.wav", 1.0, "a"),
        ]));

        assert_eq!(skipped, 2);
        assert_eq!(counter.table().get('a'), 2);
        assert_eq!(counter.table().get('b'), 1);

        let stats = counter.stats();
        assert_eq!(stats.records_counted, 2);
        assert_eq!(stats.records_skipped(), 2);
        assert_eq!(stats.skipped[0].index, 1);
        assert_eq!(stats.skipped[0].audio_filepath, "b.wav");
        assert_eq!(stats.skipped[1].reason, SkipReason::MissingText);
    }

    #[test]
    fn test_empty_text_counts_nothing() {
        let mut counter = CharCounter::new();
        let outcome = counter.count_record(&ManifestRecord::new("a.wav", 1.0, ""));
        assert_eq!(outcome, RecordOutcome::Counted(0));
        assert!(counter.table().is_empty());
    }
}
