//! Timestamp cell parsing.
//!
//! Tries an explicit chrono format when one is configured, otherwise a
//! fixed list of common layouts. Offsets are folded into UTC. Bare
//! integers are never guessed at: Unix seconds need the explicit `%s`
//! format, so a compact date like `20240301` is read as a date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use mend_core::Timestamp;

/// Layouts tried, in order, after RFC 3339 when no explicit format is set.
pub const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y%m%d%H%M%S",
];

/// Date-only layouts; the reading is placed at midnight.
pub const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Explicit format selecting whole seconds since the Unix epoch.
pub const UNIX_SECONDS_FORMAT: &str = "%s";

/// Parse a trimmed timestamp cell.
pub fn parse(cell: &str, explicit_format: Option<&str>) -> Option<Timestamp> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    match explicit_format {
        Some(fmt) => parse_with_format(cell, fmt),
        None => parse_any(cell),
    }
}

fn parse_with_format(cell: &str, fmt: &str) -> Option<Timestamp> {
    if fmt == UNIX_SECONDS_FORMAT {
        return cell
            .parse::<i64>()
            .ok()
            .and_then(Timestamp::from_unix_seconds);
    }
    if let Ok(dt) = DateTime::parse_from_str(cell, fmt) {
        return Some(dt.with_timezone(&Utc).into());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(cell, fmt) {
        return Some(naive.into());
    }
    NaiveDate::parse_from_str(cell, fmt)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Timestamp::from)
}

fn parse_any(cell: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(cell) {
        return Some(dt.with_timezone(&Utc).into());
    }

    for fmt in FALLBACK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(cell, fmt) {
            return Some(naive.into());
        }
    }

    DATE_ONLY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Timestamp::from)
}
