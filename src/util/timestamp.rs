//! Timestamp parsing and display formatting.
//!
//! Output matches what the templates were written against: day.js style
//! relative phrases ("3 hours ago") and day.js format tokens
//! (`dddd, MMMM D, YYYY h:mm A`). All formatting happens in the viewer's
//! local offset, taken from the `now` passed in.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use regex::Regex;

/// Display format meaning "relative to now".
pub const FROM_NOW: &str = "fromNow";
pub const DEFAULT_TITLE_FORMAT: &str = "dddd, MMMM D, YYYY h:mm A";
pub const INVALID_DATE: &str = "Invalid Date";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

const AVG_DAYS_PER_MONTH: f64 = 30.436_875;

static TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)]|Y{1,4}|M{1,4}|D{1,2}|d{1,4}|H{1,2}|h{1,2}|a|A|m{1,2}|s{1,2}|Z{1,2}|SSS").ok()
});

/// Parse a timestamp attribute.
///
/// Values with an explicit offset keep their instant; values without one are
/// read as wall-clock time in `local`.
pub fn parse_timestamp(raw: &str, local: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&local));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&local));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    local.from_local_datetime(&naive).single()
}

/// Relative phrase for `then` as seen from `now`, e.g. "5 minutes ago".
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn relative_time(then: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>) -> String {
    let delta_ms = now.signed_duration_since(then).num_milliseconds();
    let future = delta_ms < 0;
    let seconds = (delta_ms.unsigned_abs() as f64) / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let months = days / AVG_DAYS_PER_MONTH;
    let years = months / 12.0;

    let count = |v: f64| v.round() as u64;
    let plural = |n: u64, one: &'static str, unit: &str| {
        if n <= 1 { one.to_owned() } else { format!("{n} {unit}") }
    };

    let phrase = if count(seconds) <= 44 {
        "a few seconds".to_owned()
    } else if count(seconds) <= 89 {
        "a minute".to_owned()
    } else if count(minutes) <= 44 {
        plural(count(minutes), "a minute", "minutes")
    } else if count(minutes) <= 89 {
        "an hour".to_owned()
    } else if count(hours) <= 21 {
        plural(count(hours), "an hour", "hours")
    } else if count(hours) <= 35 {
        "a day".to_owned()
    } else if count(days) <= 25 {
        plural(count(days), "a day", "days")
    } else if count(days) <= 45 {
        "a month".to_owned()
    } else if count(months) <= 10 {
        plural(count(months), "a month", "months")
    } else if count(months) <= 17 {
        "a year".to_owned()
    } else {
        plural(count(years), "a year", "years")
    };

    if future { format!("in {phrase}") } else { format!("{phrase} ago") }
}

fn offset_string(dt: &DateTime<FixedOffset>, separator: &str) -> String {
    let total = dt.offset().local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    format!("{sign}{:02}{separator}{:02}", total / 3600, (total % 3600) / 60)
}

fn format_token(dt: &DateTime<FixedOffset>, token: &str) -> Option<String> {
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let month = dt.month0() as usize;
    let out = match token {
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "YYYY" => format!("{:04}", dt.year()),
        "M" => dt.month().to_string(),
        "MM" => format!("{:02}", dt.month()),
        "MMM" => MONTH_NAMES[month][..3].to_owned(),
        "MMMM" => MONTH_NAMES[month].to_owned(),
        "D" => dt.day().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "d" => weekday.to_string(),
        "dd" => WEEKDAY_NAMES[weekday][..2].to_owned(),
        "ddd" => WEEKDAY_NAMES[weekday][..3].to_owned(),
        "dddd" => WEEKDAY_NAMES[weekday].to_owned(),
        "H" => dt.hour().to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "h" => hour12.to_string(),
        "hh" => format!("{hour12:02}"),
        "a" => if dt.hour() < 12 { "am" } else { "pm" }.to_owned(),
        "A" => if dt.hour() < 12 { "AM" } else { "PM" }.to_owned(),
        "m" => dt.minute().to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "s" => dt.second().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "SSS" => format!("{:03}", dt.timestamp_subsec_millis().min(999)),
        "Z" => offset_string(dt, ":"),
        "ZZ" => offset_string(dt, ""),
        _ => return None,
    };
    Some(out)
}

/// Render `dt` with a day.js format pattern. `[text]` is emitted literally;
/// unknown tokens and other characters pass through unchanged.
pub fn format_pattern(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    let Some(re) = TOKEN_RE.as_ref() else {
        return pattern.to_owned();
    };
    re.replace_all(pattern, |caps: &regex::Captures<'_>| {
        if let Some(literal) = caps.get(1) {
            return literal.as_str().to_owned();
        }
        let token = &caps[0];
        format_token(dt, token).unwrap_or_else(|| token.to_owned())
    })
    .into_owned()
}

/// Text and tooltip for one timestamp element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedTimestamp {
    pub text: String,
    pub title: String,
}

/// Render a raw timestamp attribute with optional format overrides.
///
/// Unparseable input renders as [`INVALID_DATE`] in both slots.
pub fn render(
    raw: &str,
    display_format: Option<&str>,
    title_format: Option<&str>,
    now: &DateTime<FixedOffset>,
) -> RenderedTimestamp {
    let Some(dt) = parse_timestamp(raw, *now.offset()) else {
        return RenderedTimestamp {
            text: INVALID_DATE.to_owned(),
            title: INVALID_DATE.to_owned(),
        };
    };
    let display_format = display_format.filter(|f| !f.is_empty()).unwrap_or(FROM_NOW);
    let title_format = title_format.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_TITLE_FORMAT);
    let text = if display_format == FROM_NOW {
        relative_time(&dt, now)
    } else {
        format_pattern(&dt, display_format)
    };
    RenderedTimestamp {
        text,
        title: format_pattern(&dt, title_format),
    }
}
