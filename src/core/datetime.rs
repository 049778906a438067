//! Date and time resolution for deadline and event dates.
//!
//! User input like `/by tomorrow 3pm` is resolved against today's date when a
//! task is created. Anything that is not a recognizable date is kept verbatim,
//! so `/by end of sprint` still produces a usable deadline.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

const STORAGE_DATE: &str = "%Y-%m-%d";
const STORAGE_DATETIME: &str = "%Y-%m-%d %H:%M";

/// A deadline or event date as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum When {
    /// A calendar date without a time of day.
    Date(NaiveDate),
    /// A calendar date with a time of day.
    DateTime(NaiveDateTime),
    /// Free text that could not be read as a date.
    Text(String),
}

impl When {
    /// Resolve user input relative to `today`.
    ///
    /// Supports patterns like:
    /// - `2019-12-02`, `2019-12-02 18:00`
    /// - `today`, `tomorrow`, `yesterday`
    /// - `monday`, `next fri`, `next week`
    /// - `in 3 days`, `in 2 weeks`
    /// - `dec 15`, `12/15`, `12/15/2024`
    /// - any of the above followed by `3pm`, `at 15:30`, `noon`
    #[must_use]
    pub fn resolve_from(input: &str, today: NaiveDate) -> Self {
        let trimmed = input.trim();
        let lowered = trimmed.to_lowercase();

        if let Some(date) = parse_date(&lowered, today) {
            return Self::Date(date);
        }

        let (date_part, time) = extract_time(&lowered);
        match (parse_date(&date_part, today), time) {
            (Some(date), Some(time)) => Self::DateTime(NaiveDateTime::new(date, time)),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Encode for the task file.
    #[must_use]
    pub fn to_storage(&self) -> String {
        match self {
            Self::Date(date) => date.format(STORAGE_DATE).to_string(),
            Self::DateTime(dt) => dt.format(STORAGE_DATETIME).to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Decode a field written by [`When::to_storage`].
    ///
    /// Only the exact storage formats are recognized; relative words are kept
    /// as text so a stored date never drifts.
    #[must_use]
    pub fn from_storage(field: &str) -> Self {
        if let Ok(dt) = NaiveDateTime::parse_from_str(field, STORAGE_DATETIME) {
            return Self::DateTime(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(field, STORAGE_DATE) {
            return Self::Date(date);
        }
        Self::Text(field.to_string())
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%b %d %Y")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%b %d %Y %-I:%M%P")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    match input {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        "yesterday" => return today.pred_opt(),
        "next week" => return next_weekday(today, Weekday::Mon),
        _ => {},
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, STORAGE_DATE) {
        return Some(date);
    }

    parse_relative_offset(input, today)
        .or_else(|| parse_weekday(input, today))
        .or_else(|| parse_month_day(input, today))
        .or_else(|| parse_us_date(input, today))
}

/// Parse "in X days/weeks" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let days = match parts[2].trim_end_matches('s') {
        "day" => amount,
        "week" => amount.checked_mul(7)?,
        _ => return None,
    };

    today.checked_add_signed(Duration::try_days(days)?)
}

fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = match day {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let date = next_weekday(today, target)?;
    if is_next && date.signed_duration_since(today) < Duration::days(7) {
        date.checked_add_signed(Duration::days(7))
    } else {
        Some(date)
    }
}

/// The first `target` strictly after `today`.
fn next_weekday(today: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let days = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;
    today.checked_add_signed(Duration::days(if days == 0 { 7 } else { days }))
}

/// Parse "dec 15" style dates, rolling over to next year once passed.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let month = parse_month_name(parts[0])?;
    let day: u32 = parts[1].parse().ok()?;
    upcoming(today, month, day)
}

fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse US dates (MM/DD or MM/DD/YYYY).
fn parse_us_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('/').collect();

    match parts.as_slice() {
        [month, day] => upcoming(today, month.parse().ok()?, day.parse().ok()?),
        [month, day, year] => {
            let year: i32 = year.parse().ok()?;
            let year = if year < 100 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
        },
        _ => None,
    }
}

fn upcoming(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(date)
    }
}

/// Split a trailing time of day off the input.
fn extract_time(input: &str) -> (String, Option<NaiveTime>) {
    let input = input.replace(" at ", " ").replace(" @ ", " ");
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => match parse_time(last) {
            Some(time) => (rest.join(" "), Some(time)),
            None => (input.clone(), None),
        },
        _ => (input.clone(), None),
    }
}

fn parse_time(input: &str) -> Option<NaiveTime> {
    match input {
        "morning" => return NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => return NaiveTime::from_hms_opt(14, 0, 0),
        "evening" => return NaiveTime::from_hms_opt(18, 0, 0),
        "night" => return NaiveTime::from_hms_opt(21, 0, 0),
        _ => {},
    }

    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Some(time);
    }

    let (clock, is_pm) = if let Some(clock) = input.strip_suffix("pm") {
        (clock, true)
    } else if let Some(clock) = input.strip_suffix("am") {
        (clock, false)
    } else {
        return None;
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((hour, minute)) => (hour.parse::<u32>().ok()?, minute.parse::<u32>().ok()?),
        None => (clock.parse::<u32>().ok()?, 0),
    };
    if hour == 0 || hour > 12 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}
