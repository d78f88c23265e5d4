//! Build command implementation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Manifest file type accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTypeArg {
    /// Header row, then `audio_filepath;duration;text` rows
    Csv,
    /// One JSON object per line
    Json,
}

impl From<FileTypeArg> for ManifestFormat {
    fn from(v: FileTypeArg) -> Self {
        match v {
            FileTypeArg::Csv => ManifestFormat::Csv,
            FileTypeArg::Json => ManifestFormat::Json,
        }
    }
}

/// Build a character vocabulary from manifest files.
#[derive(Parser, Debug)]
#[command(name = "build-vocab")]
#[command(about = "Build a character vocabulary from speech manifests", long_about = None)]
#[command(version)]
pub struct BuildCommand {
    /// Truncation threshold for char counts (negative values keep everything)
    #[arg(long = "count_threshold", default_value_t = 0, allow_negative_numbers = true)]
    pub count_threshold: i64,

    /// Filepath to write the vocabulary
    #[arg(long = "vocab_path", default_value = DEFAULT_VOCAB_PATH)]
    pub vocab_path: PathBuf,

    /// Filepaths of manifests for building vocabulary (one or more)
    #[arg(long = "manifest_paths", required = true, num_args = 1..)]
    pub manifest_paths: Vec<PathBuf>,

    /// File type of the manifests
    #[arg(long = "file_type", value_enum, default_value = "csv")]
    pub file_type: FileTypeArg,

    /// Ignore clips shorter than this many seconds
    #[arg(long = "min_duration", default_value_t = 0.0)]
    pub min_duration: f64,

    /// Ignore clips longer than this many seconds
    #[arg(long = "max_duration")]
    pub max_duration: Option<f64>,
}

use anyhow::Result as AnyhowResult;
use charvocab::{build_vocab, ManifestFormat, VocabConfig, DEFAULT_VOCAB_PATH};
use std::time::Instant;

impl BuildCommand {
    /// Turn parsed arguments into a validated pipeline configuration.
    pub fn to_config(&self) -> charvocab::Result<VocabConfig> {
        VocabConfig::builder()
            .manifest_paths(self.manifest_paths.iter())
            .file_type(self.file_type.into())
            .count_threshold(u64::try_from(self.count_threshold).unwrap_or(0))
            .vocab_path(&self.vocab_path)
            .min_duration(self.min_duration)
            .max_duration(self.max_duration.unwrap_or(f64::INFINITY))
            .build()
    }

    fn log_arguments(&self) {
        tracing::info!("----------- Configuration Arguments -----------");
        tracing::info!("count_threshold: {}", self.count_threshold);
        tracing::info!("file_type: {}", ManifestFormat::from(self.file_type));
        for path in &self.manifest_paths {
            tracing::info!("manifest_paths: {}", path.display());
        }
        tracing::info!("vocab_path: {}", self.vocab_path.display());
        tracing::info!("min_duration: {}", self.min_duration);
        match self.max_duration {
            Some(max) => tracing::info!("max_duration: {}", max),
            None => tracing::info!("max_duration: inf"),
        }
        tracing::info!("------------------------------------------------");
    }
}

pub fn run(cmd: BuildCommand) -> AnyhowResult<()> {
    cmd.log_arguments();
    let config = cmd.to_config()?;

    let start = Instant::now();
    let summary = build_vocab(config)?;

    tracing::info!(
        "Read {} manifest(s): {} records counted, {} skipped, {} outside duration bounds",
        summary.manifests_read,
        summary.counts.records_counted,
        summary.counts.records_skipped(),
        summary.records_filtered,
    );
    tracing::info!(
        "Wrote {} of {} distinct characters to {} in {:.2}s",
        summary.vocab.len(),
        summary.distinct_chars,
        summary.vocab_path.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cmd = BuildCommand::try_parse_from(["build-vocab", "--manifest_paths", "train.csv"])
            .unwrap();

        assert_eq!(cmd.count_threshold, 0);
        assert_eq!(cmd.vocab_path, PathBuf::from("data/librispeech/vocab.txt"));
        assert_eq!(cmd.file_type, FileTypeArg::Csv);
        assert_eq!(cmd.manifest_paths, vec![PathBuf::from("train.csv")]);
        assert_eq!(cmd.max_duration, None);
    }

    #[test]
    fn test_parse_multiple_manifests() {
        let cmd = BuildCommand::try_parse_from([
            "build-vocab",
            "--count_threshold",
            "5",
            "--file_type",
            "json",
            "--manifest_paths",
            "a.json",
            "b.json",
            "--vocab_path",
            "out.txt",
        ])
        .unwrap();

        assert_eq!(cmd.count_threshold, 5);
        assert_eq!(cmd.file_type, FileTypeArg::Json);
        assert_eq!(
            cmd.manifest_paths,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );

        let config = cmd.to_config().unwrap();
        assert_eq!(config.file_type, ManifestFormat::Json);
        assert_eq!(config.vocab_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_manifest_paths_required() {
        assert!(BuildCommand::try_parse_from(["build-vocab"]).is_err());
        assert!(BuildCommand::try_parse_from(["build-vocab", "--manifest_paths"]).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(BuildCommand::try_parse_from([
            "build-vocab",
            "--manifest_paths",
            "a.csv",
            "--file_type",
            "tsv"
        ])
        .is_err());
    }

    #[test]
    fn test_negative_threshold_keeps_everything() {
        let cmd = BuildCommand::try_parse_from([
            "build-vocab",
            "--count_threshold",
            "-1",
            "--manifest_paths",
            "a.csv",
        ])
        .unwrap();

        assert_eq!(cmd.count_threshold, -1);
        assert_eq!(cmd.to_config().unwrap().count_threshold, 0);
    }

    #[test]
    fn test_inverted_duration_bounds() {
        let cmd = BuildCommand::try_parse_from([
            "build-vocab",
            "--manifest_paths",
            "a.csv",
            "--min_duration",
            "10",
            "--max_duration",
            "1",
        ])
        .unwrap();
        assert!(cmd.to_config().is_err());
    }
}
