// LogCellar - util/logging.rs
//
// tracing subscriber for a one-shot batch run.
//
// Everything goes to stderr: stdout carries only the run summary or the
// `--json` outcome, so `logcellar --json | jq` stays parseable. A RUST_LOG
// value wins outright; otherwise the level comes from --debug, then the
// config file's [logging] level, then the built-in default.

use crate::util::constants;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, before the archiver runs.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(fallback_directive(debug_flag, config_level)),
    };

    // Source locations are only useful when chasing a problem.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_flag)
        .with_file(debug_flag)
        .with_line_number(debug_flag)
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        "Logging ready"
    );
}

/// Filter directive used when RUST_LOG is unset.
fn fallback_directive(debug_flag: bool, config_level: Option<&str>) -> &str {
    if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(constants::DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_beats_config_level() {
        assert_eq!(fallback_directive(true, Some("warn")), "debug");
    }

    #[test]
    fn test_config_level_beats_default() {
        assert_eq!(fallback_directive(false, Some("warn")), "warn");
        assert_eq!(
            fallback_directive(false, None),
            constants::DEFAULT_LOG_LEVEL
        );
    }
}
