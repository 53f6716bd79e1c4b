//! Human-relative message timestamps.
//!
//! Messages younger than a day show a time of day; older ones show a short
//! month/day date. Output is relative to the `now` passed in, so the same
//! message can render differently across calls.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::config::ClockStyle;

/// Age below which a message shows a time of day instead of a date.
pub const RECENT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

const SHORT_DATE_FORMAT: &str = "%b %-d";

/// Parse an ISO-8601 timestamp as delivered by the message source.
///
/// Accepts RFC 3339, the Postgres text form (space separator, `+00` offset),
/// and offset-less values, which are wall-clock times in `tz` (the viewer's
/// zone). A wall-clock time skipped by a DST jump does not parse.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc));
        }
    }
    None
}

/// Format `created_at` relative to `now`, in `now`'s time zone.
///
/// Unparseable input is returned verbatim.
pub fn format_timestamp<Tz>(created_at: &str, now: &DateTime<Tz>, clock: ClockStyle) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let tz = now.timezone();
    let Some(created) = parse_timestamp(created_at, &tz) else {
        log::debug!("unparseable message timestamp {created_at:?}");
        return created_at.to_owned();
    };

    let local = created.with_timezone(&tz);
    let age_ms = now.timestamp_millis() - created.timestamp_millis();
    if age_ms < RECENT_WINDOW_MS {
        local.format(clock.time_format()).to_string()
    } else {
        local.format(SHORT_DATE_FORMAT).to_string()
    }
}
