// LogCellar - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error maps onto exactly one `FailureKind`, which in turn maps onto a
// process exit code, so callers branch on the category and never on the
// message text.

use crate::util::constants;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Failure categories
// ---------------------------------------------------------------------------

/// Coarse outcome category reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source directory does not exist. No work was performed.
    SourceMissing,

    /// Anything else: listing, compression, verification, configuration.
    Unexpected,
}

impl FailureKind {
    /// Process exit code for this category.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::SourceMissing => constants::EXIT_SOURCE_MISSING,
            Self::Unexpected => constants::EXIT_UNEXPECTED,
        }
    }
}

/// Top-level error type for all LogCellar operations.
#[derive(Debug)]
pub enum LogCellarError {
    /// The archive workflow failed.
    Archive(ArchiveError),

    /// Configuration could not be resolved.
    Config(ConfigError),
}

impl LogCellarError {
    /// Failure category of the underlying error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Archive(e) => e.kind(),
            Self::Config(_) => FailureKind::Unexpected,
        }
    }
}

impl fmt::Display for LogCellarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive(e) => write!(f, "Archive error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogCellarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Archive(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Archive errors
// ---------------------------------------------------------------------------

/// Errors raised while scanning, compressing, or verifying.
///
/// Deletion failures are not represented here; they are recorded per file in
/// `ArchiveReport::delete_failures`.
#[derive(Debug)]
pub enum ArchiveError {
    /// The source directory does not exist.
    SourceMissing { path: PathBuf },

    /// The source path exists but is not a directory.
    SourceNotADirectory { path: PathBuf },

    /// Permission denied accessing the source directory.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Directory listing failed part-way through.
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// The finalised archive does not contain every selected file.
    VerificationFailed {
        archive: PathBuf,
        missing: Vec<String>,
    },
}

impl ArchiveError {
    /// Failure category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::SourceMissing { .. } => FailureKind::SourceMissing,
            _ => FailureKind::Unexpected,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceMissing { path } => {
                write!(f, "Log directory not found at '{}'", path.display())
            }
            Self::SourceNotADirectory { path } => {
                write!(f, "Log path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
            Self::Traversal { path, source } => {
                write!(f, "Error listing '{}': {source}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::VerificationFailed { archive, missing } => write!(
                f,
                "Archive '{}' is missing {} selected file(s): {}",
                archive.display(),
                missing.len(),
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Traversal { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ArchiveError> for LogCellarError {
    fn from(e: ArchiveError) -> Self {
        Self::Archive(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration resolution.
///
/// Problems inside config.toml are non-fatal warnings (see
/// `platform::config::load_config`); only values that leave the run without a
/// usable setting end up here.
#[derive(Debug)]
pub enum ConfigError {
    /// The target date is not a valid `YYYY-MM-DD` date.
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { value, source } => {
                write!(
                    f,
                    "Target date '{value}' is not a valid YYYY-MM-DD date: {source}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for LogCellarError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogCellar results.
pub type Result<T> = std::result::Result<T, LogCellarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_source_missing_maps_to_exit_2() {
        let err = ArchiveError::SourceMissing {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.kind(), FailureKind::SourceMissing);
        assert_eq!(err.kind().exit_code(), 2);
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn test_other_archive_errors_are_unexpected() {
        let err = ArchiveError::io(
            "/tmp/out.tar.gz",
            "archive create",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(err.kind(), FailureKind::Unexpected);
        assert_eq!(err.kind().exit_code(), 1);
        assert!(err.to_string().contains("disk full"));
        assert!(err.source().is_some(), "I/O cause must be chained");
    }

    #[test]
    fn test_config_errors_are_unexpected() {
        let parse_err = chrono::NaiveDate::parse_from_str("yesterday", "%Y-%m-%d").unwrap_err();
        let err: LogCellarError = ConfigError::InvalidDate {
            value: "yesterday".to_string(),
            source: parse_err,
        }
        .into();
        assert_eq!(err.kind(), FailureKind::Unexpected);
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_top_level_preserves_kind() {
        let err: LogCellarError = ArchiveError::SourceMissing {
            path: PathBuf::from("logs"),
        }
        .into();
        assert_eq!(err.kind(), FailureKind::SourceMissing);
    }

    #[test]
    fn test_verification_failed_lists_missing_names() {
        let err = ArchiveError::VerificationFailed {
            archive: PathBuf::from("logs_2024-01-01.tar.gz"),
            missing: vec!["a.log".to_string(), "b.log".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 selected file(s)"), "got: {msg}");
        assert!(msg.contains("a.log, b.log"), "got: {msg}");
    }
}
