//! Deadline composition from a calendar date and an optional time of day.

use crate::error::CoreError;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Render an instant the way due dates are stored: RFC 3339, UTC, milliseconds.
pub fn format_due(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Combine `date` (`YYYY-MM-DD`) and an optional `time` (`HH:MM`) in the local
/// zone into a stored due-date string.
///
/// Without a time the deadline is local midnight. Without a date the deadline is `now`.
pub fn compose_due(
    date: Option<&str>,
    time: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String, CoreError> {
    let Some(date) = date else {
        return Ok(format_due(now));
    };

    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
        CoreError::InvalidDueDate {
            input: date.to_string(),
            reason: e.to_string(),
        }
    })?;
    let clock = match time {
        Some(t) => NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|e| {
            CoreError::InvalidDueDate {
                input: t.to_string(),
                reason: e.to_string(),
            }
        })?,
        None => NaiveTime::MIN,
    };

    let local = Local
        .from_local_datetime(&day.and_time(clock))
        .earliest()
        .ok_or_else(|| CoreError::InvalidDueDate {
            input: format!("{} {}", date, clock.format("%H:%M")),
            reason: "does not exist in the local time zone".into(),
        })?;
    Ok(format_due(local.with_timezone(&Utc)))
}
