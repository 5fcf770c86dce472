// LogCellar - app/archiver.rs
//
// The archive-then-delete workflow.
//
// The sequence is strictly linear:
//   1. setup      - create the source dir, only on request
//   2. select     - list the source dir, keep `*<date>*.log`, sort by name
//   3. early exit - empty selection is a successful "nothing to archive"
//   4. archive    - create the destination dir, write logs_<date>.tar.gz
//                   (temp file + rename)
//   5. verify     - re-read the archive, every selected name must be present
//   6. delete     - remove originals; per-file failures are reported, not fatal
//
// No source file is removed unless steps 4 and 5 succeeded for the whole
// selection. The archive is never rolled back once written.

use crate::core::archive;
use crate::core::matcher::{self, Clock, DateMatcher};
use crate::core::model::{ArchiveReport, RunOutcome};
use crate::core::selection;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{ArchiveError, ConfigError};
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};

// =============================================================================
// Job definition
// =============================================================================

/// Everything one archiver run needs. No global state is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    /// Directory scanned for log files.
    pub source_dir: PathBuf,

    /// Directory the archive is written into (created if absent).
    pub dest_dir: PathBuf,

    /// Calendar day whose log files are archived.
    pub target_date: NaiveDate,

    /// Create `source_dir` when it is missing instead of reporting
    /// `SourceMissing`.
    pub create_source_dir: bool,

    /// Select and report only; write and delete nothing.
    pub dry_run: bool,
}

impl ArchiveJob {
    /// Job with the built-in default directories.
    pub fn new(target_date: NaiveDate) -> Self {
        Self {
            source_dir: PathBuf::from(constants::DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(constants::DEFAULT_DEST_DIR),
            target_date,
            create_source_dir: false,
            dry_run: false,
        }
    }

    /// Final path of the archive this job produces.
    pub fn archive_path(&self) -> PathBuf {
        self.dest_dir.join(matcher::archive_file_name(self.target_date))
    }
}

/// Settings supplied on the command line or through the environment.
///
/// `None` / `false` means "not given"; the config file and the built-in
/// defaults fill the gaps.
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub target_date: Option<String>,
    pub create_source_dir: bool,
    pub dry_run: bool,
}

/// Merge overrides, config file, and defaults into a job.
///
/// Priority per setting: override > config file > built-in default. The
/// target date defaults to the day before `clock.today()`.
pub fn resolve_job(
    overrides: &JobOverrides,
    config: &AppConfig,
    clock: &dyn Clock,
) -> Result<ArchiveJob, ConfigError> {
    let target_date = match overrides.target_date.as_deref() {
        Some(value) => matcher::parse_target_date(value)?,
        None => matcher::default_target_date(clock),
    };

    let mut job = ArchiveJob::new(target_date);
    if let Some(dir) = overrides.source_dir.clone().or_else(|| config.source_dir.clone()) {
        job.source_dir = dir;
    }
    if let Some(dir) = overrides.dest_dir.clone().or_else(|| config.dest_dir.clone()) {
        job.dest_dir = dir;
    }
    job.create_source_dir = overrides.create_source_dir || config.create_source_dir;
    job.dry_run = overrides.dry_run;

    tracing::debug!(
        source = %job.source_dir.display(),
        dest = %job.dest_dir.display(),
        date = %target_date,
        create_source_dir = job.create_source_dir,
        dry_run = job.dry_run,
        "Job resolved"
    );
    Ok(job)
}

// =============================================================================
// Run
// =============================================================================

/// Run one archival pass.
///
/// # Errors
/// `SourceMissing` when the source directory does not exist (and
/// `create_source_dir` is off); any other `ArchiveError` for failures during
/// setup, listing, compression, or verification. Deletion failures are not
/// errors: they are reported in `ArchiveReport::delete_failures`.
pub fn run(job: &ArchiveJob) -> Result<RunOutcome, ArchiveError> {
    run_with_remover(job, |path| std::fs::remove_file(path))
}

/// `run` with the removal of each archived original delegated to `remove`.
pub fn run_with_remover<F>(job: &ArchiveJob, remove: F) -> Result<RunOutcome, ArchiveError>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let matcher = DateMatcher::new(job.target_date);
    let date = matcher.token().to_string();

    tracing::info!(
        source = %job.source_dir.display(),
        dest = %job.dest_dir.display(),
        date = %date,
        "Starting log archive run"
    );

    // 1. setup
    if job.create_source_dir && !job.dry_run {
        fs::ensure_dir(&job.source_dir)?;
    }

    // 2. select
    let files = selection::select_log_files(&job.source_dir, &matcher)?;

    // 3. early exit
    if files.is_empty() {
        tracing::info!(date = %date, "No log files found for date");
        return Ok(RunOutcome::NothingToArchive { date });
    }

    let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
    tracing::info!(count = files.len(), files = ?names, "Found log files to archive");

    let archive_path = job.archive_path();
    if job.dry_run {
        return Ok(RunOutcome::DryRun {
            date,
            archive_path,
            files,
        });
    }

    // 4. archive
    fs::ensure_dir(&job.dest_dir)?;
    let archive_size = archive::write_archive(&archive_path, &files)?;

    // 5. verify
    archive::verify_archive(&archive_path, &files)?;

    // 6. delete
    let (deleted, delete_failures) = fs::remove_files(&files, remove);
    if delete_failures.is_empty() {
        tracing::info!(removed = deleted.len(), "Original log files removed");
    } else {
        tracing::warn!(
            removed = deleted.len(),
            failed = delete_failures.len(),
            "Some archived log files could not be removed"
        );
    }

    Ok(RunOutcome::Archived(ArchiveReport {
        date,
        archive_path,
        archive_size,
        archived: names,
        deleted,
        delete_failures,
    }))
}
