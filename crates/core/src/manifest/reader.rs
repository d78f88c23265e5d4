//! Manifest loading.
//!
//! Both formats are read completely before anything is counted: a malformed
//! line anywhere in the file fails the whole read.

use super::format::{DurationBounds, ManifestFormat};
use super::record::{ManifestRecord, Transcript};
use crate::error::{Result, VocabError};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Number of columns in a CSV manifest row.
const CSV_COLUMNS: usize = 3;

/// Records kept from one manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// File the records came from
    pub path: PathBuf,
    /// Records inside the duration bounds, in file order
    pub records: Vec<ManifestRecord>,
    /// Number of records dropped by the duration filter
    pub filtered_out: usize,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// JSON manifest line. Only `duration` is required up front.
#[derive(Debug, Deserialize)]
struct JsonLine {
    duration: f64,
    #[serde(default)]
    audio_filepath: Option<String>,
    #[serde(default)]
    text: Option<Value>,
}

/// Manifest reader - parses manifest files and applies the duration filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestReader {
    format: ManifestFormat,
    bounds: DurationBounds,
}

impl ManifestReader {
    pub fn new(format: ManifestFormat, bounds: DurationBounds) -> Self {
        Self { format, bounds }
    }

    /// Load and parse a manifest file.
    ///
    /// # Errors
    /// `VocabError::Io` if the file cannot be opened or read, and
    /// `VocabError::ManifestParse` for the first line that does not parse.
    pub fn read(&self, path: &Path) -> Result<Manifest> {
        let file = File::open(path).map_err(|err| VocabError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let reader = BufReader::new(file);

        let mut manifest = Manifest {
            path: path.to_path_buf(),
            records: Vec::new(),
            filtered_out: 0,
        };

        let records = match self.format {
            ManifestFormat::Json => parse_json(reader, path)?,
            ManifestFormat::Csv => parse_csv(reader, path)?,
        };

        for record in records {
            if self.bounds.contains(record.duration) {
                manifest.records.push(record);
            } else {
                manifest.filtered_out += 1;
            }
        }

        tracing::debug!(
            path = %path.display(),
            kept = manifest.records.len(),
            filtered_out = manifest.filtered_out,
            "parsed manifest"
        );

        Ok(manifest)
    }
}

fn parse_json<R: BufRead>(reader: R, path: &Path) -> Result<Vec<ManifestRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_num = index as u64 + 1;
        let line = line.map_err(|err| VocabError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        let parsed: JsonLine = serde_json::from_str(&line)
            .map_err(|e| VocabError::parse(path, line_num, e.to_string()))?;

        records.push(ManifestRecord {
            audio_filepath: parsed.audio_filepath.unwrap_or_default(),
            duration: parsed.duration,
            text: Transcript::from_json(parsed.text),
        });
    }

    Ok(records)
}

fn parse_csv<R: BufRead>(reader: R, path: &Path) -> Result<Vec<ManifestRecord>> {
    // The header is skipped whatever it contains, so its width is not checked.
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let line_num = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != CSV_COLUMNS {
            return Err(VocabError::parse(
                path,
                line_num,
                format!("expected {} fields, found {}", CSV_COLUMNS, row.len()),
            ));
        }

        let duration_field = row[1].trim();
        let duration = duration_field.parse::<f64>().map_err(|_| {
            VocabError::parse(
                path,
                line_num,
                format!("invalid duration '{}'", duration_field),
            )
        })?;

        let text = match &row[2] {
            "" => Transcript::Missing,
            text => Transcript::Text(text.to_string()),
        };

        records.push(ManifestRecord {
            audio_filepath: row[0].to_string(),
            duration,
            text,
        });
    }

    Ok(records)
}

fn csv_error(path: &Path, err: csv::Error) -> VocabError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(err) => VocabError::Io {
            path: path.to_path_buf(),
            err,
        },
        _ => VocabError::parse(path, line, message),
    }
}
