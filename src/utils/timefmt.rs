//! Timestamp and duration rendering for response envelopes.
//!
//! Output mirrors the ISO-8601 style callers of the joke and weather
//! endpoints already parse:
//!
//! - local timestamps without offset: `2024-03-01T12:30:05.123456`
//! - UTC timestamps with explicit offset: `2024-03-01T10:30:05.123456+00:00`
//! - elapsed time: `0:00:00.351204`, `1 day, 2:03:04`
//!
//! The fractional part is omitted when the microsecond component is zero.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Timelike, Utc};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Renders a local timestamp without a UTC offset.
pub fn iso_local(at: &DateTime<Local>) -> String {
    iso_naive(&at.naive_local())
}

/// Renders a UTC timestamp with a `+00:00` offset.
pub fn iso_utc(at: &DateTime<Utc>) -> String {
    format!("{}+00:00", iso_naive(&at.naive_utc()))
}

fn iso_naive(at: &NaiveDateTime) -> String {
    // Leap seconds surface as nanosecond values >= 1e9.
    let micros = (at.nanosecond() % 1_000_000_000) / 1_000;
    let base = at.format("%Y-%m-%dT%H:%M:%S");

    if micros == 0 {
        base.to_string()
    } else {
        format!("{}.{:06}", base, micros)
    }
}

/// Renders an elapsed time as `[D day(s), ]H:MM:SS[.ffffff]`.
///
/// Negative spans are expressed with a negative day count and a positive
/// remainder, e.g. `-1 day, 23:59:59.999000` for minus one millisecond.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed
        .num_microseconds()
        .unwrap_or_else(|| elapsed.num_milliseconds().saturating_mul(1_000));

    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);

    let micros = rest % MICROS_PER_SECOND;
    let seconds = rest / MICROS_PER_SECOND;
    let (hours, minutes, seconds) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);

    let mut out = String::new();
    if days != 0 {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }

    out
}
