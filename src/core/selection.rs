// LogCellar - core/selection.rs
//
// Source-directory scan and log file selection.
//
// Uses `walkdir` pinned to depth 1: the source directory is listed but never
// descended into, so a nested `old/app.2024-01-01.log` is not archived.
// Only metadata is read here; file contents are read by core::archive.

use crate::core::matcher::DateMatcher;
use crate::core::model::LogFile;
use crate::util::error::ArchiveError;
use std::io;
use std::path::Path;

/// Select the log files in `source_dir` that belong to the matcher's date.
///
/// The result is sorted by file name so archive order is reproducible.
/// Regular files and symlinks that resolve to a regular file are selected.
/// Directories, dangling links and links to directories are skipped even
/// when their names match.
///
/// # Errors
/// - `SourceMissing` if `source_dir` does not exist.
/// - `SourceNotADirectory` / `PermissionDenied` for an unusable root.
/// - `Traversal` / `Io` if listing fails part-way through.
pub fn select_log_files(
    source_dir: &Path,
    matcher: &DateMatcher,
) -> Result<Vec<LogFile>, ArchiveError> {
    // fs::metadata rather than Path::is_dir so NotFound and PermissionDenied
    // stay distinguishable.
    match std::fs::metadata(source_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(ArchiveError::SourceNotADirectory {
                path: source_dir.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ArchiveError::SourceMissing {
                path: source_dir.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ArchiveError::PermissionDenied {
                path: source_dir.to_path_buf(),
                source: e,
            });
        }
        Err(e) => return Err(ArchiveError::io(source_dir, "stat source directory", e)),
    }

    tracing::debug!(
        source = %source_dir.display(),
        token = matcher.token(),
        "Selection starting"
    );

    let walker = walkdir::WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|source| ArchiveError::Traversal {
            path: source_dir.to_path_buf(),
            source,
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let file_name = match entry.file_name().to_str() {
            Some(n) => n,
            None => {
                tracing::debug!(path = %entry.path().display(), "Skipping non-UTF-8 filename");
                continue;
            }
        };

        if !matcher.matches(file_name) {
            tracing::trace!(file = file_name, "Not matched");
            continue;
        }

        let size = if file_type.is_symlink() {
            // The archive stores the link target's content; the link itself
            // is what gets removed afterwards.
            match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => meta.len(),
                Ok(_) => {
                    tracing::debug!(file = file_name, "Skipping symlink to a non-file");
                    continue;
                }
                Err(e) => {
                    tracing::debug!(file = file_name, error = %e, "Skipping unresolvable symlink");
                    continue;
                }
            }
        } else if file_type.is_file() {
            entry
                .metadata()
                .map_err(|source| ArchiveError::Traversal {
                    path: entry.path().to_path_buf(),
                    source,
                })?
                .len()
        } else {
            tracing::trace!(file = file_name, "Skipping special file");
            continue;
        };

        files.push(LogFile {
            path: entry.path().to_path_buf(),
            file_name: file_name.to_string(),
            date: matcher.token().to_string(),
            size,
        });
    }

    tracing::debug!(selected = files.len(), "Selection complete");
    Ok(files)
}
