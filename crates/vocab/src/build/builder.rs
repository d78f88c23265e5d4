//! Vocabulary build pipeline.
//!
//! read manifests -> filter by duration -> count characters -> sort ->
//! truncate at the count threshold -> write.

use super::config::VocabConfig;
use super::counter::{CharCounter, CountStats};
use super::writer::{truncate, VocabWriter};
use charvocab_core::{CharCount, CharFrequencies, ManifestReader, Result};
use std::path::PathBuf;

/// Outcome of a finished build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Number of manifest files read
    pub manifests_read: usize,
    /// Records dropped by the duration filter
    pub records_filtered: usize,
    /// Counting totals, including skipped records
    pub counts: CountStats,
    /// Distinct characters seen
    pub distinct_chars: usize,
    /// Characters written to the vocabulary, with their counts
    pub vocab: Vec<CharCount>,
    /// Where the vocabulary was written
    pub vocab_path: PathBuf,
}

/// Vocabulary builder.
///
/// Runs a single synchronous pass over the configured manifests.
pub struct VocabBuilder {
    config: VocabConfig,
}

impl VocabBuilder {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    /// Count characters across all manifests, in the configured order.
    ///
    /// Returns the counter along with the number of records filtered out
    /// by duration.
    pub fn count(&self) -> Result<(CharCounter, usize)> {
        let reader = ManifestReader::new(self.config.file_type, self.config.duration);
        let mut counter = CharCounter::new();
        let mut filtered = 0;

        for path in &self.config.manifest_paths {
            let manifest = reader.read(path)?;
            let skipped = counter.count_manifest(&manifest);
            filtered += manifest.filtered_out;

            tracing::info!(
                manifest = %path.display(),
                records = manifest.len(),
                filtered_out = manifest.filtered_out,
                skipped,
                "counted manifest"
            );
        }

        Ok((counter, filtered))
    }

    /// Entries that make it into the vocabulary, most frequent first.
    pub fn select(&self, table: &CharFrequencies) -> Vec<CharCount> {
        let sorted = table.sorted();
        truncate(&sorted, self.config.count_threshold).to_vec()
    }

    /// Run the whole pipeline and write the vocabulary file.
    pub fn build(&self) -> Result<BuildSummary> {
        let (counter, records_filtered) = self.count()?;
        let (table, counts) = counter.into_parts();

        let vocab = self.select(&table);
        VocabWriter::new(&self.config.vocab_path).write(&vocab)?;

        if counts.records_skipped() > 0 {
            tracing::warn!(
                skipped = counts.records_skipped(),
                "some records could not be counted; their characters are missing from the totals"
            );
        }
        tracing::info!(
            path = %self.config.vocab_path.display(),
            distinct = table.len(),
            total = table.total(),
            written = vocab.len(),
            threshold = self.config.count_threshold,
            "vocabulary written"
        );

        Ok(BuildSummary {
            manifests_read: self.config.manifest_paths.len(),
            records_filtered,
            counts,
            distinct_chars: table.len(),
            vocab,
            vocab_path: self.config.vocab_path.clone(),
        })
    }
}

/// Build a vocabulary from `config`.
pub fn build_vocab(config: VocabConfig) -> Result<BuildSummary> {
    VocabBuilder::new(config).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_applies_threshold() {
        let builder = VocabBuilder::new(VocabConfig::builder().count_threshold(2).build().unwrap());
        let table: CharFrequencies = "aab".chars().collect();
        assert_eq!(builder.select(&table), vec![('a', 2)]);
    }

    #[test]
    fn test_select_ties_in_first_seen_order() {
        let builder = VocabBuilder::new(VocabConfig::default());
        let table: CharFrequencies = "hihi".chars().collect();
        assert_eq!(builder.select(&table), vec![('h', 2), ('i', 2)]);
    }

    #[test]
    fn test_missing_manifest_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let vocab_path = dir.path().join("vocab.txt");
        let config = VocabConfig::builder()
            .manifest_path(dir.path().join("missing.csv"))
            .vocab_path(&vocab_path)
            .build()
            .unwrap();

        assert!(build_vocab(config).is_err());
        assert!(!vocab_path.exists());
    }
}
