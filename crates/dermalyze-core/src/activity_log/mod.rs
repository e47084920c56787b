//! Append-only activity log (CSV).
//!
//! Columns are fixed: `Timestamp, Name, Email, Analysis, Internal_Health`.
//! The header is written once, when the file is empty; every later write
//! appends a single data row.
//!
//! Concurrency: the file is opened in append mode and each row goes out in one
//! `write` call, so rows from concurrent processes do not interleave mid-row on
//! local filesystems. Writers are not coordinated beyond that; two processes
//! creating the file at the same moment can both emit a header.

mod entry;

pub use entry::{LogEntry, TIMESTAMP_FORMAT};

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LogError;

#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> LogError {
        LogError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one entry, creating the file (and parent dir) with a header if needed.
    pub fn append(&self, entry: &LogEntry) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;
        let is_new = file.metadata().map_err(|e| self.io_err(e))?.len() == 0;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(Vec::new());
        wtr.serialize(entry)?;
        let buf = wtr
            .into_inner()
            .map_err(|e| self.io_err(e.into_error()))?;

        file.write_all(&buf).map_err(|e| self.io_err(e))?;
        file.flush().map_err(|e| self.io_err(e))?;

        tracing::debug!(
            "appended activity row for {} to {}{}",
            entry.email,
            self.path.display(),
            if is_new { " (new file)" } else { "" }
        );
        Ok(())
    }

    /// All logged entries in file order. A missing log reads as empty.
    pub fn entries(&self) -> Result<Vec<LogEntry>, LogError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let mut out = Vec::new();
        for row in rdr.deserialize::<LogEntry>() {
            out.push(row?);
        }
        Ok(out)
    }

    /// Entries whose email matches `email` (case-insensitive).
    pub fn entries_for(&self, email: &str) -> Result<Vec<LogEntry>, LogError> {
        let needle = email.trim();
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.email.trim().eq_ignore_ascii_case(needle))
            .collect())
    }

    /// Copy the raw log to `dest`; returns the number of bytes copied.
    pub fn export_to(&self, dest: &Path) -> Result<u64, LogError> {
        if !self.path.exists() {
            return Err(LogError::NoHistory {
                path: self.path.clone(),
            });
        }
        fs::copy(&self.path, dest).map_err(|source| LogError::Io {
            path: dest.to_path_buf(),
            source,
        })
    }
}
