//! Civil calendar dates and the date arithmetic the picker is built on.
//!
//! Months are zero-based (`0` is January) to match the calendar panels and the
//! `data-pika-month` attributes emitted by the markup layer.
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date expressed as year, zero-based month, and day.
///
/// Dates order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate", into = "RawDate"))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if month > 11 {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Builds a date from out-of-range parts: month and day overflow carry
    /// into the next unit, and day `0` is the last day of the previous month.
    pub fn from_overflowing(year: i32, month: i32, day: i32) -> Self {
        let total = year as i64 * 12 + month as i64;
        let year = total.div_euclid(12) as i32;
        let month = total.rem_euclid(12) as u8;
        let days = days_from_civil(year, month, 1) + day as i64 - 1;
        Self::from_days(days)
    }

    /// Returns the date for a day number counted from 1970-01-01.
    pub fn from_days(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn to_days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (0-11).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the day of the week, `0` for Sunday through `6` for Saturday.
    pub fn weekday(&self) -> u8 {
        (self.to_days() + 4).rem_euclid(7) as u8
    }

    /// Returns the date `delta` days away.
    pub fn add_days(&self, delta: i64) -> Self {
        Self::from_days(self.to_days() + delta)
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        Self {
            day: days_in_month(self.year, self.month),
            ..*self
        }
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_days((duration.as_secs() / 86_400) as i64)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDate {
    year: i32,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for CalendarDate {
    type Error = String;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        CalendarDate::new(raw.year, raw.month, raw.day).ok_or_else(|| {
            format!(
                "invalid calendar date {}-{}-{} (month is zero-based)",
                raw.year, raw.month, raw.day
            )
        })
    }
}

#[cfg(feature = "serde")]
impl From<CalendarDate> for RawDate {
    fn from(date: CalendarDate) -> Self {
        RawDate {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

/// A calendar date with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: CalendarDate,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl LocalDateTime {
    /// Creates a date-time if the time of day is valid.
    pub fn new(
        date: CalendarDate,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return None;
        }
        Some(Self {
            date,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Returns the date component.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the millisecond (0-999).
    pub fn millisecond(&self) -> u16 {
        self.millisecond
    }
}

impl From<CalendarDate> for LocalDateTime {
    fn from(date: CalendarDate) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

/// Returns true for leap years in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a zero-based month.
///
/// # Panics
///
/// Panics if `month` is greater than 11.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 1 && is_leap_year(year) {
        return 29;
    }
    DAYS_PER_MONTH[month as usize]
}

/// Returns true when the date falls on a Saturday or Sunday.
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), 0 | 6)
}

/// Drops the time of day.
pub fn start_of_day(value: LocalDateTime) -> CalendarDate {
    value.date
}

/// Exact year, month, and day comparison.
///
/// Callers holding date-times normalize with [`start_of_day`] first.
pub fn dates_equal(a: CalendarDate, b: CalendarDate) -> bool {
    a == b
}

/// Returns the week-of-year number for a possibly overflowing date.
///
/// Counts weeks so that the week containing January 1st is week 1, shifting
/// by January 1st's weekday: `ceil((days_since_jan1 + weekday(jan1) + 1) / 7)`.
pub fn week_number(year: i32, month: i32, day: i32) -> u32 {
    let date = CalendarDate::from_overflowing(year, month, day);
    let jan1 = CalendarDate::from_overflowing(year, 0, 1);
    let offset = date.to_days() - jan1.to_days() + jan1.weekday() as i64 + 1;
    (offset + 6).div_euclid(7).max(0) as u32
}

fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let m = month as i64 + 1;
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, (month - 1) as u8, day as u8)
}
