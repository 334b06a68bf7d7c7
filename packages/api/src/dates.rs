//! # Dates and the school calendar
//!
//! The school year starts in September: dates from September to December
//! belong to `{Y}-{Y+1}`, dates from January to August to `{Y-1}-{Y}`. The
//! first semester runs September to January, the second February to August.
//!
//! Formatting patterns use day.js-style tokens:
//!
//! | Token | Output |
//! |-------|--------|
//! | `YYYY` / `YY` | 2024 / 24 |
//! | `MM` / `M` | 09 / 9 |
//! | `DD` / `D` | 05 / 5 |
//! | `HH` / `H` | 24-hour clock |
//! | `hh` / `h` | 12-hour clock |
//! | `mm` / `m`, `ss` / `s` | minutes, seconds |
//! | `SSS` | milliseconds |
//! | `A` / `a` | AM/PM, am/pm |
//! | `[text]` | literal text |
//!
//! Functions that depend on "now" take it as a parameter; the `current_*`
//! helpers read the local clock.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

pub const DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DATE_TIME_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// School year label for `date`, e.g. `2024-2025`.
pub fn school_year(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() >= 9 {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Semester number (1 or 2) for `date`.
pub fn semester(date: NaiveDate) -> u8 {
    match date.month() {
        9..=12 | 1 => 1,
        _ => 2,
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn current_school_year() -> String {
    school_year(today())
}

pub fn current_semester() -> u8 {
    semester(today())
}

/// Parse the date and date-time shapes the backend produces. Zoned
/// timestamps are converted to local time.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    const DATE_TIMES: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in DATE_TIMES {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_datetime(value).map(|dt| dt.date())
}

const TOKENS: &[&str] = &[
    "YYYY", "SSS", "YY", "MM", "DD", "HH", "hh", "mm", "ss", "M", "D", "H", "h", "m", "s", "A", "a",
];

/// Render `dt` with a day.js-style pattern.
pub fn format_with(dt: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        let Some(token) = TOKENS.iter().find(|t| rest.starts_with(*t)) else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };

        let hour12 = match dt.hour() % 12 {
            0 => 12,
            h => h,
        };
        let rendered = match *token {
            "YYYY" => format!("{:04}", dt.year()),
            "YY" => format!("{:02}", dt.year().rem_euclid(100)),
            "MM" => format!("{:02}", dt.month()),
            "M" => dt.month().to_string(),
            "DD" => format!("{:02}", dt.day()),
            "D" => dt.day().to_string(),
            "HH" => format!("{:02}", dt.hour()),
            "H" => dt.hour().to_string(),
            "hh" => format!("{:02}", hour12),
            "h" => hour12.to_string(),
            "mm" => format!("{:02}", dt.minute()),
            "m" => dt.minute().to_string(),
            "ss" => format!("{:02}", dt.second()),
            "s" => dt.second().to_string(),
            "SSS" => format!("{:03}", dt.nanosecond() / 1_000_000 % 1000),
            "A" => (if dt.hour() < 12 { "AM" } else { "PM" }).to_string(),
            _ => (if dt.hour() < 12 { "am" } else { "pm" }).to_string(),
        };
        out.push_str(&rendered);
        rest = &rest[token.len()..];
    }
    out
}

/// Format a date string from the server; empty or unparsable input gives `""`.
pub fn format_date(value: &str, pattern: &str) -> String {
    parse_datetime(value)
        .map(|dt| format_with(dt, pattern))
        .unwrap_or_default()
}

pub fn format_date_time(value: &str) -> String {
    format_date(value, DATE_TIME_FORMAT)
}

pub fn current_date(pattern: &str) -> String {
    format_with(now(), pattern)
}

pub fn current_date_time() -> String {
    format_with(now(), DATE_TIME_FORMAT)
}

/// Human distance between `then` and `now`, worded like day.js `fromNow`.
pub fn relative_time(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (now - then).num_seconds();
    let future = seconds < 0;
    let s = seconds.unsigned_abs() as f64;
    let round = |v: f64| v.round() as u64;

    let minutes = s / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    let phrase = if s < 45.0 {
        "a few seconds".to_string()
    } else if s < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", round(minutes))
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", round(hours))
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", round(days))
    } else if days < 45.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{} months", round(days / 30.4).max(2))
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{} years", round(days / 365.25).max(2))
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// [`relative_time`] for a server date string against the local clock.
pub fn relative_time_str(value: &str) -> String {
    parse_datetime(value)
        .map(|then| relative_time(then, now()))
        .unwrap_or_default()
}

/// Whole years between `birth` and `today`; negative for a future birth date.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    let birthday_passed = (today.month(), today.day()) >= (birth.month(), birth.day());
    if years > 0 && !birthday_passed {
        years -= 1;
    } else if years < 0 && birthday_passed && (today.month(), today.day()) != (birth.month(), birth.day()) {
        years += 1;
    }
    years
}

pub fn is_today(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|d| d == today)
}
