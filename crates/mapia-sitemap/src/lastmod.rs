//! `lastmod` normalization.
//!
//! Stores hand timestamps back in whatever textual form their column type
//! produces. Sitemap consumers expect a single UTC instant format, so every
//! accepted input is converted to `YYYY-MM-DDTHH:MM:SS.sssZ`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};

/// Date-time layouts carrying an explicit offset (`%#z` allows `+00`).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];

/// Date-time layouts without offset, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Convert a stored timestamp to a UTC instant with millisecond precision.
///
/// Accepts RFC 3339 with any offset, offset-less date-times (taken as UTC)
/// and bare `YYYY-MM-DD` dates (UTC midnight). Sub-millisecond digits are
/// truncated. Returns `None` when the input matches none of these, and for
/// leap seconds (`:60`), which `xsd:dateTime` cannot express.
#[must_use]
pub fn normalize_lastmod(raw: &str) -> Option<String> {
    parse_utc(raw.trim())
        .filter(|dt| dt.nanosecond() < 1_000_000_000)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
