// LogCellar - platform/fs.rs
//
// Filesystem side effects outside the archive itself: directory setup and
// removal of source files once they are safely archived.

use crate::core::model::{DeleteFailure, LogFile};
use crate::util::error::ArchiveError;
use std::io;
use std::path::Path;

/// Create `dir` (and any missing parents) if it does not already exist.
///
/// Idempotent: an existing directory is left untouched.
pub fn ensure_dir(dir: &Path) -> Result<(), ArchiveError> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| ArchiveError::io(dir, "create directory", e))?;
    tracing::info!(dir = %dir.display(), "Created directory");
    Ok(())
}

/// Remove every file in `files` through `remove` (normally
/// `std::fs::remove_file`).
///
/// A failed removal does not stop the loop: the remaining files are still
/// removed and each failure is returned alongside the successes.
pub fn remove_files<F>(files: &[LogFile], mut remove: F) -> (Vec<String>, Vec<DeleteFailure>)
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut deleted = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for file in files {
        match remove(&file.path) {
            Ok(()) => {
                tracing::debug!(file = %file.file_name, "Removed original");
                deleted.push(file.file_name.clone());
            }
            Err(e) => {
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "Failed to remove archived log file"
                );
                failures.push(DeleteFailure {
                    file_name: file.file_name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (deleted, failures)
}
