// LogCellar - app/demo.rs
//
// Seeds a source directory with dummy log files so the archiver can be tried
// out without a real log-writing process: several files for the target date
// and one for today, which a run must leave in place.

use crate::core::matcher::date_token;
use crate::platform::fs::ensure_dir;
use crate::util::constants;
use crate::util::error::ArchiveError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Write `app.<target>.<i>.log` for i in `0..DEMO_FILES_PER_DAY` plus
/// `app.<today>.0.log` into `dir`, creating it if needed.
///
/// Existing files with the same names are overwritten. Returns the paths
/// written, target-date files first.
pub fn seed_demo_files(
    dir: &Path,
    target: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<PathBuf>, ArchiveError> {
    ensure_dir(dir)?;

    let target_token = date_token(target);
    let mut written = Vec::with_capacity(constants::DEMO_FILES_PER_DAY + 1);

    for i in 0..constants::DEMO_FILES_PER_DAY {
        let path = dir.join(format!("app.{target_token}.{i}.log"));
        std::fs::write(&path, constants::DEMO_TARGET_CONTENT)
            .map_err(|e| ArchiveError::io(&path, "seed demo file", e))?;
        written.push(path);
    }

    if today != target {
        let path = dir.join(format!("app.{}.0.log", date_token(today)));
        std::fs::write(&path, constants::DEMO_TODAY_CONTENT)
            .map_err(|e| ArchiveError::io(&path, "seed demo file", e))?;
        written.push(path);
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "Seeded demo log files");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_target_and_today_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("app_logs");
        let target = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let written = seed_demo_files(&dir, target, today).unwrap();
        assert_eq!(written.len(), constants::DEMO_FILES_PER_DAY + 1);
        assert!(dir.join("app.2024-01-01.0.log").is_file());
        assert!(dir.join("app.2024-01-01.2.log").is_file());
        assert_eq!(
            std::fs::read_to_string(dir.join("app.2024-01-02.0.log")).unwrap(),
            constants::DEMO_TODAY_CONTENT
        );
    }

    #[test]
    fn test_same_day_does_not_clobber_target_file() {
        let root = tempfile::tempdir().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let written = seed_demo_files(root.path(), day, day).unwrap();
        assert_eq!(written.len(), constants::DEMO_FILES_PER_DAY);
        assert_eq!(
            std::fs::read_to_string(root.path().join("app.2024-01-01.0.log")).unwrap(),
            constants::DEMO_TARGET_CONTENT
        );
    }
}
