//! Per-entry results and the aggregated run report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::Entry;
use crate::error::FetchError;

/// What happened to a single entry during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryStatus {
    /// The document was downloaded and the file replaced.
    Written {
        /// Size of the written file in bytes
        bytes_written: u64,
    },

    /// The document could not be downloaded; the file was left untouched.
    FetchFailed {
        /// Why the download failed
        error: FetchError,
    },

    /// The document was downloaded but writing the file failed.
    WriteFailed {
        /// Description of the filesystem error
        cause: String,
    },
}

impl EntryStatus {
    /// Returns true if the file was written.
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// The result of refreshing one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    url: String,
    filename: String,
    path: PathBuf,
    status: EntryStatus,
}

impl EntryOutcome {
    /// Creates an outcome for `entry`, written (or not) at `path`.
    pub fn new(entry: &Entry, path: impl Into<PathBuf>, status: EntryStatus) -> Self {
        Self {
            url: entry.source().to_string(),
            filename: entry.filename().to_string(),
            path: path.into(),
            status,
        }
    }

    /// Returns the source URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the destination filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the full destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the status.
    pub fn status(&self) -> &EntryStatus {
        &self.status
    }
}

/// Ordered outcomes of a refresh run.
///
/// The report is informational: a run with failed entries still completes
/// normally, and callers decide what (if anything) to do about failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    outcomes: Vec<EntryOutcome>,
}

impl RefreshReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome.
    pub fn push(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns all outcomes in processing order.
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// Returns the outcomes whose file was written.
    pub fn written(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_written())
    }

    /// Returns the outcomes that failed to download.
    pub fn fetch_failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, EntryStatus::FetchFailed { .. }))
    }

    /// Returns the outcomes that failed to write.
    pub fn write_failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, EntryStatus::WriteFailed { .. }))
    }

    /// Returns the total number of bytes written.
    pub fn total_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                EntryStatus::Written { bytes_written } => bytes_written,
                _ => 0,
            })
            .sum()
    }

    /// Returns true if every entry was written.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_written())
    }

    /// Returns the number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if no entry was processed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
