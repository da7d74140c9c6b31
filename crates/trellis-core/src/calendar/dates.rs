/// Date helpers shared by the calendar reducer and the day grid
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::exceptions::TrellisError;

/// Gregorian leap year rule: divisible by 4 and not by 100, unless also divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// The first day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Moves a month cursor by `delta` months. The result is always pinned to day 1
/// so that month arithmetic never overflows into the following month.
pub fn shift_month(cursor: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(cursor);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// (year, month) key used to order months independently of the day
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    month_key(a) == month_key(b)
}

/// Parse a date string. Accepts plain `YYYY-MM-DD`, an ISO datetime
/// (`YYYY-MM-DDTHH:MM:SS`) or a full RFC 3339 timestamp; the time part is dropped.
pub fn parse_date(s: &str) -> Result<NaiveDate, TrellisError> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(TrellisError::InvalidDate(format!(
        "'{s}' is not a YYYY-MM-DD date or RFC 3339 timestamp"
    )))
}

/// Parse a `YYYY-MM` month string into the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, TrellisError> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| TrellisError::InvalidDate(format!("'{s}' is not a YYYY-MM month")))
}
