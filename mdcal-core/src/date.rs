//! Date-only values shared by the calendar grid and the path templates.
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt::{self, Write};

/// A calendar day with no time-of-day or time-zone component.
///
/// Months are zero-based (`0` = January, `11` = December), which keeps month
/// navigation arithmetic simple. A `CalendarDate` can only be built for a day
/// that exists in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from a year, a zero-based month and a day of month.
    ///
    /// Returns `None` when the day does not exist in that month.
    ///
    /// ```
    /// # use mdcal_core::CalendarDate;
    /// let leap_day = CalendarDate::new(2024, 1, 29);
    /// assert!(leap_day.is_some());
    /// assert!(CalendarDate::new(2023, 1, 29).is_none());
    /// assert!(CalendarDate::new(2024, 12, 1).is_none());
    /// ```
    pub fn new(year: i32, month0: u32, day: u32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month, `0..=11`.
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Compares year, month and day only.
    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month0() == other.month0() && self.day() == other.day()
    }

    /// Weekday index where Sunday is `0` and Saturday is `6`.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Formats with a strftime-style pattern (e.g. `%A, %d %B %Y`).
    ///
    /// An invalid pattern falls back to `YYYY-MM-DD` instead of failing.
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.0.format(pattern)).is_err() {
            return self.to_string();
        }
        out
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Number of days in a month, taken as the day before the first of the next month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Checks that a strftime-style pattern contains only recognised specifiers.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Supplies "today" to anything that needs the current date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// The local date of the machine running the program.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate(Local::now().date_naive())
    }
}

/// A clock frozen on a single day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
