// LogCellar - util/constants.rs
//
// Single source of truth for all named constants, defaults, and naming
// conventions used across the archiver.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogCellar";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogCellar";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Archive naming and selection
// =============================================================================

/// Suffix a file name must end with to be considered a log file.
pub const LOG_FILE_SUFFIX: &str = ".log";

/// Prefix of every archive file name (`logs_<date>.tar.gz`).
pub const ARCHIVE_FILE_PREFIX: &str = "logs_";

/// Extension of every archive file name.
pub const ARCHIVE_FILE_EXTENSION: &str = ".tar.gz";

/// Extension appended to the archive name while it is being written.
/// The temp file is renamed onto the final name only after it is finalised.
pub const ARCHIVE_TEMP_SUFFIX: &str = ".tmp";

/// Date format of the token embedded in log file names and archive names.
pub const DATE_TOKEN_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Defaults
// =============================================================================

/// Default source directory (relative to the working directory).
pub const DEFAULT_SOURCE_DIR: &str = "./app_logs";

/// Default destination directory (relative to the working directory).
pub const DEFAULT_DEST_DIR: &str = "./backups";

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Valid values for `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Demo seeding
// =============================================================================

/// Number of dummy log files seeded for the target date by `--seed-demo`.
pub const DEMO_FILES_PER_DAY: usize = 3;

/// Content written to each seeded target-date log file.
pub const DEMO_TARGET_CONTENT: &str = "This is a dummy log file.";

/// Content written to the seeded log file for today (must not be archived).
pub const DEMO_TODAY_CONTENT: &str = "This is today's log.";

// =============================================================================
// File names
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the source directory (below the CLI flag in priority).
pub const ENV_SOURCE_DIR: &str = "LOGCELLAR_SOURCE_DIR";

/// Overrides the destination directory.
pub const ENV_DEST_DIR: &str = "LOGCELLAR_DEST_DIR";

/// Overrides the target date (`YYYY-MM-DD`).
pub const ENV_TARGET_DATE: &str = "LOGCELLAR_TARGET_DATE";

// =============================================================================
// Process exit codes
// =============================================================================

/// Run succeeded, including "nothing to archive" and dry runs.
pub const EXIT_OK: u8 = 0;

/// Any failure other than a missing source directory.
pub const EXIT_UNEXPECTED: u8 = 1;

/// The source directory does not exist.
pub const EXIT_SOURCE_MISSING: u8 = 2;
