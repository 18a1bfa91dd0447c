//! Best-effort timestamp parsing and locale date formatting.
//!
//! TRADE-OFFS
//! ==========
//! Upstream records carry timestamps in whatever shape the backend emitted.
//! Parsing tries the known shapes in order and never panics; anything else
//! renders as the configured fallback text. Dates are taken in UTC so the
//! same timestamp formats identically on every host.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::state::display::{DateLocale, DisplayConfig};

/// Shortest digit string read as epoch millis (1970-04-26). Shorter digit
/// runs such as `20240115` are compact dates, not timestamps.
const EPOCH_MILLIS_MIN_DIGITS: usize = 11;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("empty timestamp")]
    Empty,
    #[error("unrecognized timestamp: {0}")]
    Unrecognized(String),
}

/// Parse a timestamp into its UTC calendar date.
///
/// Accepts RFC 3339, naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]`, plain
/// `YYYY-MM-DD`, and epoch milliseconds of at least 11 digits.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Some(dt) = parse_epoch_millis(trimmed) {
        return Ok(dt.date_naive());
    }
    Err(DateParseError::Unrecognized(trimmed.to_owned()))
}

fn parse_epoch_millis(raw: &str) -> Option<DateTime<Utc>> {
    if raw.len() < EPOCH_MILLIS_MIN_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok().and_then(DateTime::<Utc>::from_timestamp_millis)
}

pub fn format_date(date: NaiveDate, locale: DateLocale) -> String {
    date.format(locale.pattern()).to_string()
}

/// Format an optional timestamp, falling back to `config.missing_text`.
pub fn format_date_or_missing(raw: Option<&str>, config: &DisplayConfig) -> String {
    let Some(raw) = raw else {
        return config.missing_text.clone();
    };
    match parse_timestamp(raw) {
        Ok(date) => format_date(date, config.date_locale),
        Err(DateParseError::Empty) => config.missing_text.clone(),
        Err(err) => {
            leptos::logging::debug_warn!("date fallback: {err}");
            config.missing_text.clone()
        }
    }
}
