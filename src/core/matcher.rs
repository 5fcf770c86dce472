// LogCellar - core/matcher.rs
//
// Target-date handling: the filename matcher, the archive naming convention,
// and an injectable clock so the "yesterday" default never has to be tested
// against the real system time.
// Core layer: pure logic, no I/O.

use crate::util::constants;
use crate::util::error::ConfigError;
use chrono::{Local, NaiveDate};

// =============================================================================
// Clock
// =============================================================================

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date in the operator's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date archived when none is configured: the day before `clock.today()`.
pub fn default_target_date(clock: &dyn Clock) -> NaiveDate {
    let today = clock.today();
    // Only NaiveDate::MIN has no predecessor.
    today.pred_opt().unwrap_or(today)
}

/// Parse a `YYYY-MM-DD` target date.
pub fn parse_target_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), constants::DATE_TOKEN_FORMAT).map_err(|source| {
        ConfigError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// Render a date as the token embedded in file names.
pub fn date_token(date: NaiveDate) -> String {
    date.format(constants::DATE_TOKEN_FORMAT).to_string()
}

/// Archive file name for `date`: `logs_<YYYY-MM-DD>.tar.gz`.
pub fn archive_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        constants::ARCHIVE_FILE_PREFIX,
        date_token(date),
        constants::ARCHIVE_FILE_EXTENSION
    )
}

// =============================================================================
// Matcher
// =============================================================================

/// Decides whether a file name belongs to the target date.
///
/// A name matches when it contains the `YYYY-MM-DD` token anywhere and ends
/// with `.log`. Substring matching also accepts unrelated digit runs that
/// happen to spell the date (e.g. inside a device ID).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatcher {
    token: String,
}

impl DateMatcher {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            token: date_token(date),
        }
    }

    /// The `YYYY-MM-DD` token searched for.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.contains(&self.token) && file_name.ends_with(constants::LOG_FILE_SUFFIX)
    }
}
