//! Vocabulary output.
//!
//! The vocabulary file is UTF-8 text with one character per line, most
//! frequent first. It is written to a temporary file next to the destination
//! and renamed into place, so a failed run never leaves a partial file.

use charvocab_core::{CharCount, Result, VocabError};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Keep the leading entries whose count is at least `threshold`.
///
/// `sorted` must be in descending count order. Emission stops at the first
/// entry below the threshold; nothing after it is considered.
pub fn truncate(sorted: &[CharCount], threshold: u64) -> &[CharCount] {
    let end = sorted
        .iter()
        .position(|&(_, count)| count < threshold)
        .unwrap_or(sorted.len());
    &sorted[..end]
}

/// Writes vocabulary files.
#[derive(Debug, Clone)]
pub struct VocabWriter {
    path: PathBuf,
}

impl VocabWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the characters of `entries`, in order, replacing any existing file.
    ///
    /// Returns the number of lines written.
    ///
    /// # Errors
    /// `VocabError::UnwritableChar` if an entry is a line terminator, and
    /// `VocabError::Write` if the file cannot be created, written or renamed.
    /// In both cases the destination is left as it was.
    pub fn write(&self, entries: &[CharCount]) -> Result<usize> {
        if let Some(&(ch, _)) = entries.iter().find(|&&(ch, _)| is_line_break(ch)) {
            return Err(VocabError::UnwritableChar { ch });
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| self.write_error(err))?;

        let mut temp = self.temp_file(dir).map_err(|err| self.write_error(err))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            for &(ch, _) in entries {
                writeln!(writer, "{}", ch).map_err(|err| self.write_error(err))?;
            }
            writer.flush().map_err(|err| self.write_error(err))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|err| self.write_error(err))?;

        temp.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;

        tracing::debug!(path = %self.path.display(), lines = entries.len(), "wrote vocabulary");
        Ok(entries.len())
    }

    /// Temp file in `dir` with the permissions the destination should end up with.
    ///
    /// An existing destination keeps its mode; a new one gets 0666 minus the umask,
    /// like a plain `File::create`.
    fn temp_file(&self, dir: &Path) -> io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(".vocab");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let temp = builder.tempfile_in(dir)?;

        if let Ok(existing) = fs::metadata(&self.path) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
        Ok(temp)
    }

    fn write_error(&self, err: io::Error) -> VocabError {
        VocabError::Write {
            path: self.path.clone(),
            err,
        }
    }
}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
