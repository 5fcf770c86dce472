// LogCellar - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::path::PathBuf;

// =============================================================================
// Log file (ephemeral, discovered by scan)
// =============================================================================

/// A log file selected for archival.
///
/// Discovered by scanning the source directory; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFile {
    /// Full path in the source directory.
    pub path: PathBuf,

    /// Bare file name. This is the name the file is stored under inside
    /// the archive, so extraction never recreates the source tree.
    pub file_name: String,

    /// The `YYYY-MM-DD` token the file was matched on.
    pub date: String,

    /// File size in bytes at scan time.
    pub size: u64,
}

// =============================================================================
// Run results
// =============================================================================

/// A source file that was archived but could not be removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteFailure {
    pub file_name: String,
    pub reason: String,
}

/// Result of a run that produced an archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    /// Target date of the run (`YYYY-MM-DD`).
    pub date: String,

    /// Final path of the written archive.
    pub archive_path: PathBuf,

    /// Size of the compressed archive in bytes.
    pub archive_size: u64,

    /// Entry names written to the archive, in write order.
    pub archived: Vec<String>,

    /// Source files removed after the archive was finalised.
    pub deleted: Vec<String>,

    /// Source files that are in the archive but are still on disk.
    pub delete_failures: Vec<DeleteFailure>,
}

impl ArchiveReport {
    /// True when every archived file was also removed from the source.
    pub fn is_clean(&self) -> bool {
        self.delete_failures.is_empty()
    }
}

/// Successful end states of a run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Files were archived (and, normally, removed).
    Archived(ArchiveReport),

    /// No file matched the target date. Nothing was written or removed.
    NothingToArchive { date: String },

    /// Dry run: the files that would have been archived.
    DryRun {
        date: String,
        archive_path: PathBuf,
        files: Vec<LogFile>,
    },
}

impl RunOutcome {
    /// One-line human-readable summary for the operator.
    pub fn summary(&self) -> String {
        match self {
            Self::Archived(report) => {
                let mut line = format!(
                    "Archived {} log file(s) into '{}' ({} bytes), removed {}",
                    report.archived.len(),
                    report.archive_path.display(),
                    report.archive_size,
                    report.deleted.len(),
                );
                if !report.is_clean() {
                    line.push_str(&format!(
                        "; {} file(s) could not be removed",
                        report.delete_failures.len()
                    ));
                }
                line
            }
            Self::NothingToArchive { date } => {
                format!("No log files from {date} found. Nothing to archive.")
            }
            Self::DryRun {
                archive_path,
                files,
                ..
            } => format!(
                "Dry run: would archive {} log file(s) into '{}'",
                files.len(),
                archive_path.display()
            ),
        }
    }
}
