//! Date and time parsing for command arguments.
//!
//! Timestamps are timezone-free (`NaiveDateTime`). Input is matched
//! against a fixed, ordered list of human-entry formats; the first
//! format that accepts the text wins, and date-only input normalizes
//! to midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// The earliest representable timestamp, used as the default list lower bound.
pub const EARLIEST: NaiveDateTime = NaiveDateTime::MIN;

/// The latest representable timestamp, used as the default list upper bound.
pub const LATEST: NaiveDateTime = NaiveDateTime::MAX;

/// A date/time token that matched none of the accepted formats.
///
/// The `Display` output is shown to the user verbatim, so it names the
/// rejected text and example accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date/time '{input}': expected a format like 2024-03-01 1800, 2024-03-01 18:00 or 01/03/2024")]
pub struct DateTimeError {
    input: String,
}

impl DateTimeError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

// Attempted in order; first match wins. Date-with-time forms come
// before date-only so a trailing time is never silently dropped.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H%M",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a user-entered date/time string.
///
/// Accepts ISO dates (`2024-03-01`), day-first slash dates
/// (`01/03/2024`), and either form followed by a 24-hour time
/// (`1800` or `18:00`). Date-only input maps to midnight.
///
/// # Errors
///
/// Returns [`DateTimeError`] when the text matches no accepted format.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateTimeError> {
    let text = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return Ok(parsed.and_time(NaiveTime::MIN));
        }
    }

    Err(DateTimeError {
        input: text.to_string(),
    })
}
