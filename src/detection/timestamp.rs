//! Syslog timestamp conversion
//!
//! Auth-log timestamps look like `Jun 10 03:32:36` and carry no year,
//! so a run-wide assumed year is supplied by configuration. Within one
//! assumed year the result is monotonic with chronological order,
//! which is all the frequency rule needs for its subtraction.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur converting a log timestamp
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("Unparseable timestamp {timestamp:?}: {source}")]
    Parse {
        timestamp: String,
        source: chrono::ParseError,
    },
}

/// Convert a `"<Month> <Day> <HH:MM:SS>"` timestamp to seconds since
/// the Unix epoch, under the given assumed year.
///
/// The month may be abbreviated (`Jun`) or spelled out (`June`); the
/// day may be one or two digits.
pub fn to_epoch_seconds(timestamp: &str, year: i32) -> Result<i64, TimestampError> {
    let dated = format!("{} {}", year, timestamp.trim());
    // %B accepts both the full and the abbreviated month name when parsing.
    let parsed = NaiveDateTime::parse_from_str(&dated, "%Y %B %d %H:%M:%S").map_err(
        |source| TimestampError::Parse {
            timestamp: timestamp.to_string(),
            source,
        },
    )?;
    Ok(parsed.and_utc().timestamp())
}
