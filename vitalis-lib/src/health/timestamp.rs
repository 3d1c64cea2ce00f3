//! Platform timestamp normalization.

use crate::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use ohno::IntoAppError;

const FORMAT_WITH_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const FORMAT_WITHOUT_FRACTION: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a UTC timestamp of the form `2024-01-15T10:30:00Z` or `2024-01-15T10:30:00.123Z`.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(timestamp, FORMAT_WITH_FRACTION)
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, FORMAT_WITHOUT_FRACTION))
        .map(|naive| naive.and_utc())
        .into_app_err_with(|| format!("invalid ISO 8601 timestamp '{timestamp}'"))
}

/// Whole days elapsed between `then` and `now`, rounded down.
///
/// A timestamp in the future counts as zero days.
#[must_use]
pub fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let seconds = (now - then).num_seconds().div_euclid(86_400);
    u64::try_from(seconds).unwrap_or(0)
}
