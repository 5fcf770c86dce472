// LogCellar - core/archive.rs
//
// gzip-compressed tar writer and reader.
//
// The archive is written to a sibling temp file and renamed onto its final
// name only after the tar stream is closed, the gzip trailer written, and the
// file synced. A crash or error mid-write therefore never leaves a truncated
// `logs_<date>.tar.gz` behind, and the caller never deletes source files
// against a half-written archive.

use crate::core::model::LogFile;
use crate::util::constants;
use crate::util::error::ArchiveError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Path of the in-progress temp file for `archive_path`.
pub fn temp_path(archive_path: &Path) -> PathBuf {
    let mut name = archive_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(constants::ARCHIVE_TEMP_SUFFIX);
    archive_path.with_file_name(name)
}

/// Write every file in `files` into a new gzip-compressed tar at
/// `archive_path`, each stored under its bare file name.
///
/// An existing archive at `archive_path` is replaced. On error the temp file
/// is removed and no archive is created.
///
/// Returns the size of the finished archive in bytes.
pub fn write_archive(archive_path: &Path, files: &[LogFile]) -> Result<u64, ArchiveError> {
    let tmp = temp_path(archive_path);

    if let Err(e) = write_to(&tmp, files) {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), error = %cleanup, "Temp archive not removed");
        }
        return Err(e);
    }

    std::fs::rename(&tmp, archive_path).map_err(|e| {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), error = %cleanup, "Temp archive not removed");
        }
        ArchiveError::io(archive_path, "archive rename", e)
    })?;

    let size = std::fs::metadata(archive_path)
        .map_err(|e| ArchiveError::io(archive_path, "archive stat", e))?
        .len();

    tracing::info!(
        archive = %archive_path.display(),
        entries = files.len(),
        bytes = size,
        "Archive finalised"
    );
    Ok(size)
}

/// Build the tar.gz stream at `tmp` and close it fully.
fn write_to(tmp: &Path, files: &[LogFile]) -> Result<(), ArchiveError> {
    let file = File::create(tmp).map_err(|e| ArchiveError::io(tmp, "archive create", e))?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for log in files {
        builder
            .append_path_with_name(&log.path, &log.file_name)
            .map_err(|e| ArchiveError::io(&log.path, "archive append", e))?;
        tracing::debug!(file = %log.file_name, bytes = log.size, "Added to archive");
    }

    // Tar end-of-archive blocks first, then the gzip trailer, then flush.
    let encoder = builder
        .into_inner()
        .map_err(|e| ArchiveError::io(tmp, "archive finish", e))?;
    let writer = encoder
        .finish()
        .map_err(|e| ArchiveError::io(tmp, "gzip finish", e))?;
    let file = writer
        .into_inner()
        .map_err(|e| ArchiveError::io(tmp, "archive flush", e.into_error()))?;
    file.sync_all()
        .map_err(|e| ArchiveError::io(tmp, "archive sync", e))?;
    Ok(())
}

/// List the entry names stored in the tar.gz at `archive_path`, in archive
/// order.
pub fn list_archive_entries(archive_path: &Path) -> Result<Vec<String>, ArchiveError> {
    let file =
        File::open(archive_path).map_err(|e| ArchiveError::io(archive_path, "archive open", e))?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    let entries = archive
        .entries()
        .map_err(|e| ArchiveError::io(archive_path, "archive read", e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::io(archive_path, "archive read", e))?;
        let path = entry
            .path()
            .map_err(|e| ArchiveError::io(archive_path, "archive read", e))?;
        names.push(path.to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Confirm that every selected file is present in the archive.
///
/// Returns `VerificationFailed` listing the names that are absent.
pub fn verify_archive(archive_path: &Path, files: &[LogFile]) -> Result<(), ArchiveError> {
    let entries = list_archive_entries(archive_path)?;
    let missing: Vec<String> = files
        .iter()
        .filter(|f| !entries.iter().any(|e| e == &f.file_name))
        .map(|f| f.file_name.clone())
        .collect();

    if missing.is_empty() {
        tracing::debug!(archive = %archive_path.display(), entries = entries.len(), "Archive verified");
        Ok(())
    } else {
        Err(ArchiveError::VerificationFailed {
            archive: archive_path.to_path_buf(),
            missing,
        })
    }
}
