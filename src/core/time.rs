//! Clock math and display formatting for event times.
//!
//! All formatting is locale-independent: fixture data and tests rely on the
//! exact strings produced here.

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

/// Shift a timestamp by a whole number of hours (negative moves backwards).
pub fn add_hours(dt: DateTime<Local>, hours: i64) -> DateTime<Local> {
    dt + Duration::hours(hours)
}

/// Format a single clock time, e.g. `"6:05 PM"` or `"18:05"`.
pub fn format_clock(dt: &DateTime<Local>, twenty_four_hour: bool) -> String {
    if twenty_four_hour {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%-I:%M %p").to_string()
    }
}

/// Human label for a calendar day relative to `today`:
/// `"Today"`, `"Tomorrow"`, or `"Sat Aug 23"`.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_string()
    } else {
        date.format("%a %b %-d").to_string()
    }
}

/// Format a start/end pair as one compact range.
///
/// Twelve-hour ranges share the meridiem when both ends fall on the same
/// side of noon (`"6:00 – 8:00 PM"`); otherwise both ends carry it
/// (`"11:00 AM – 1:00 PM"`). Events that do not start today are prefixed
/// with their day label (`"Tomorrow · 6:00 – 8:00 PM"`).
pub fn format_range(
    start: &DateTime<Local>,
    end: &DateTime<Local>,
    twenty_four_hour: bool,
    today: NaiveDate,
) -> String {
    let body = if twenty_four_hour {
        format!("{} – {}", start.format("%H:%M"), end.format("%H:%M"))
    } else {
        let same_day = start.date_naive() == end.date_naive();
        let (start_pm, _) = start.hour12();
        let (end_pm, _) = end.hour12();
        if same_day && start_pm == end_pm {
            format!("{} – {}", start.format("%-I:%M"), end.format("%-I:%M %p"))
        } else {
            format!(
                "{} – {}",
                start.format("%-I:%M %p"),
                end.format("%-I:%M %p")
            )
        }
    };

    if start.date_naive() == today {
        body
    } else {
        format!("{} · {}", day_label(start.date_naive(), today), body)
    }
}

/// Format an event duration, e.g. `"2h"`, `"1h 30m"`, `"45m"`.
pub fn format_duration(d: Duration) -> String {
    let minutes = d.num_minutes().max(0);
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
