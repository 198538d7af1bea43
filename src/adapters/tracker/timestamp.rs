//! Changelog timestamp conversion.
//!
//! Tracker changelog entries carry `created` strings such as
//! `2017-05-03T17:06:18.123+0200`. Conversion is a fixed-format parse:
//! the first 16 characters (`YYYY-MM-DDTHH:MM`, minute precision) are
//! parsed as a naive datetime, then a trailing `±HHMM` offset, when
//! present, normalizes the value to UTC. Seconds and sub-second digits
//! are discarded. Anything that does not fit this shape is an error.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

use crate::domain::errors::{DomainError, DomainResult};

/// Length of the minute-precision prefix `YYYY-MM-DDTHH:MM`.
const MINUTE_PREFIX_LEN: usize = 16;

/// Parse a changelog `created` string into a UTC instant.
///
/// A `+HHMM` suffix is subtracted and a `-HHMM` suffix added, so the
/// result is the UTC instant the local timestamp denotes.
pub fn parse_created(raw: &str) -> DomainResult<DateTime<Utc>> {
    let prefix = raw
        .get(..MINUTE_PREFIX_LEN)
        .ok_or_else(|| DomainError::MalformedTimestamp(raw.to_string()))?;

    let naive = NaiveDateTime::parse_from_str(prefix, "%Y-%m-%dT%H:%M")
        .map_err(|_| DomainError::MalformedTimestamp(raw.to_string()))?;

    let adjusted = match utc_offset(raw) {
        Some(offset) => naive - offset,
        None => naive,
    };

    Ok(Utc.from_utc_datetime(&adjusted))
}

/// Parse a changelog `created` string into Unix epoch seconds.
pub fn created_to_epoch(raw: &str) -> DomainResult<i64> {
    parse_created(raw).map(|dt| dt.timestamp())
}

/// Extract a trailing `±HHMM` offset as a signed duration east of UTC.
///
/// Returns `None` when the string carries no such suffix.
fn utc_offset(raw: &str) -> Option<Duration> {
    let bytes = raw.as_bytes();
    if bytes.len() < MINUTE_PREFIX_LEN + 5 {
        return None;
    }

    let sign = bytes[bytes.len() - 5];
    if sign != b'+' && sign != b'-' {
        return None;
    }

    let digits = &raw[raw.len() - 4..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i64 = digits[..2].parse().ok()?;
    let minutes: i64 = digits[2..].parse().ok()?;
    let magnitude = Duration::minutes(hours * 60 + minutes);

    if sign == b'+' {
        Some(magnitude)
    } else {
        Some(-magnitude)
    }
}
