// LogCellar - platform/config.rs
//
// Platform config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogCellar configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logcellar/ or %APPDATA%\LogCellar\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[archive]` section.
    pub archive: ArchiveSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[archive]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ArchiveSection {
    /// Directory scanned for log files.
    pub source_dir: Option<String>,
    /// Directory the archive is written into.
    pub dest_dir: Option<String>,
    /// Create the source directory when it is missing.
    pub create_source_dir: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from config.toml.
///
/// Every field is optional: `None` means "not set in the file", so the
/// caller can layer CLI flags and environment variables on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub create_source_dir: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate config.toml at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings.
/// A missing file yields defaults; the absence is only reported as a warning
/// when the path was given explicitly (`explicit`). An unreadable or
/// unparseable file yields defaults plus a warning, so a broken config never
/// prevents the nightly run.
pub fn load_config(config_path: &Path, explicit: bool) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        if explicit {
            warnings.push(format!(
                "Config file '{}' does not exist. Using defaults.",
                config_path.display()
            ));
        }
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, parse_warnings) = parse_config(&content, config_path);
    warnings.extend(parse_warnings);
    (config, warnings)
}

/// Parse and validate config.toml content. `origin` is used in messages only.
pub fn parse_config(content: &str, origin: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                origin.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Archive: directories --
    config.source_dir = non_empty_path(raw.archive.source_dir, "source_dir", &mut warnings);
    config.dest_dir = non_empty_path(raw.archive.dest_dir, "dest_dir", &mut warnings);
    config.create_source_dir = raw.archive.create_source_dir.unwrap_or(false);

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

fn non_empty_path(value: Option<String>, field: &str, warnings: &mut Vec<String>) -> Option<PathBuf> {
    match value {
        Some(v) if v.trim().is_empty() => {
            warnings.push(format!("[archive] {field} is empty. Using default."));
            None
        }
        Some(v) => Some(PathBuf::from(v)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        parse_config(content, Path::new("config.toml"))
    }

    #[test]
    fn test_full_config() {
        let (config, warnings) = parse(
            r#"
            [archive]
            source_dir = "/var/log/app"
            dest_dir = "/srv/backups"
            create_source_dir = true

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.source_dir, Some(PathBuf::from("/var/log/app")));
        assert_eq!(config.dest_dir, Some(PathBuf::from("/srv/backups")));
        assert!(config.create_source_dir);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let (config, warnings) = parse("");
        assert!(warnings.is_empty());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (config, warnings) = parse("[archive]\nretention_days = 7\n[future]\nx = 1\n");
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let (config, warnings) = parse("[archive]\nsource_dir = \"  \"\n[logging]\nlevel = \"loud\"\n");
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(config.source_dir.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_malformed_toml_warns() {
        let (config, warnings) = parse("[archive\nsource_dir = ");
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let (_, implicit) = load_config(&path, false);
        assert!(implicit.is_empty(), "implicit default path may be absent");

        let (config, explicit) = load_config(&path, true);
        assert_eq!(config, AppConfig::default());
        assert_eq!(explicit.len(), 1);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[archive]\ndest_dir = \"out\"\n").unwrap();
        let (config, warnings) = load_config(&path, true);
        assert!(warnings.is_empty());
        assert_eq!(config.dest_dir, Some(PathBuf::from("out")));
    }
}
