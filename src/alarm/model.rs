use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Largest look-back bound the range selectors allow, in minutes (12 hours).
pub const MAX_RANGE_MIN: i64 = 720;
/// Largest spacing between generated alarms, in minutes.
pub const MAX_STEP_MIN: i64 = 120;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a local date-time from any of the accepted input formats.
/// A bare `YYYY-MM-DD` date resolves to midnight. Anything else is `None`;
/// callers fall back rather than erroring.
pub fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses an `H:MM`/`HH:MM` time-of-day string. The minute part must be
/// exactly two digits; the hour is clamped to 0-23 and the minute to 0-59.
pub fn parse_hm(input: &str) -> Option<(u32, u32)> {
    let (hour_part, minute_part) = input.trim().split_once(':')?;
    if hour_part.is_empty()
        || hour_part.len() > 2
        || !hour_part.bytes().all(|byte| byte.is_ascii_digit())
    {
        return None;
    }
    if minute_part.len() != 2 || !minute_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let hour = hour_part.parse::<u32>().ok()?.min(23);
    let minute = minute_part.parse::<u32>().ok()?.min(59);
    Some((hour, minute))
}

/// Resolves the reference date used by the HH:MM path. Invalid or absent
/// input defaults to the current date.
pub fn resolve_reference_date(raw: Option<&str>, now: NaiveDateTime) -> NaiveDate {
    raw.and_then(parse_local_datetime)
        .map(|value| value.date())
        .unwrap_or_else(|| now.date())
}

/// Resolves the arrival time from the two possible inputs. A parseable
/// explicit date-time wins; otherwise an HH:MM string is combined with the
/// reference date. An explicit value that fails to parse falls through to
/// the HH:MM path instead of erroring.
pub fn resolve_arrival(
    explicit: Option<&str>,
    hm: Option<&str>,
    reference: NaiveDate,
) -> Option<NaiveDateTime> {
    if let Some(raw) = explicit
        && let Some(parsed) = parse_local_datetime(raw)
    {
        return Some(parsed);
    }
    let (hour, minute) = hm.and_then(parse_hm)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(reference.and_time(time))
}

/// Window and spacing for the alarm batch, all in minutes before arrival.
/// Construction clamps rather than rejects: the bounds land in
/// `0..=MAX_RANGE_MIN` and the step in `1..=MAX_STEP_MIN`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RangeParameters {
    pub from_minutes: i64,
    pub to_minutes: i64,
    pub step_minutes: i64,
}

impl RangeParameters {
    pub fn new(from_minutes: i64, to_minutes: i64, step_minutes: i64) -> Self {
        Self {
            from_minutes: from_minutes.clamp(0, MAX_RANGE_MIN),
            to_minutes: to_minutes.clamp(0, MAX_RANGE_MIN),
            step_minutes: step_minutes.clamp(1, MAX_STEP_MIN),
        }
    }
}

impl Default for RangeParameters {
    fn default() -> Self {
        Self::new(120, 10, 10)
    }
}

pub fn format_ymd(value: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", value.year(), value.month(), value.day())
}

pub fn format_hm(value: NaiveDateTime) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}
