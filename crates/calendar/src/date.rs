//! Broken-down proleptic Gregorian dates.

use std::fmt;

use crate::day_count::DayCount;
use crate::error::DomainError;
use crate::gregorian;

/// A proleptic Gregorian date with time of day, to the whole second.
///
/// Years follow the no-year-zero convention: -1 is 1 BCE.
/// Fields are ordered so that the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl CalendarDate {
    /// Creates a date at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the year is zero, the month is outside
    /// 1..=12, or the day is outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        Self::with_time(year, month, day, 0, 0, 0)
    }

    /// Creates a date with a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for any out-of-range component, checked in
    /// order year, month, day, hour, minute, second.
    pub fn with_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DomainError> {
        gregorian::validate_date(year, month, day)?;
        if hour > 23 {
            return Err(DomainError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(DomainError::InvalidMinute { minute });
        }
        if second > 59 {
            return Err(DomainError::InvalidSecond { second });
        }
        Ok(Self::from_parts(year, month, day, hour, minute, second))
    }

    /// Assembles a date from components already known to be valid.
    pub(crate) fn from_parts(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Returns the calendar year (never zero).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns `(year, month, day)`.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns `(hour, minute, second)`.
    pub fn hms(self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    /// Returns the same date with the time of day dropped.
    pub fn at_midnight(self) -> Self {
        Self::from_parts(self.year, self.month, self.day, 0, 0, 0)
    }

    /// Returns `true` if the time of day is exactly midnight.
    pub fn is_midnight(self) -> bool {
        self.hms() == (0, 0, 0)
    }

    /// Returns `true` for years before the common era.
    pub fn is_bce(self) -> bool {
        self.year < 0
    }

    /// Returns the 1-based day within the year (1..=366).
    pub fn ordinal(self) -> u16 {
        gregorian::ordinal(self.year, self.month, self.day)
    }

    /// Returns the century, counted without a century zero.
    ///
    /// 1901..=2000 is the 20th century and 100 BCE..=1 BCE is century -1.
    pub fn century(self) -> i32 {
        if self.year > 0 {
            (self.year - 1) / 100 + 1
        } else {
            -((-self.year - 1) / 100 + 1)
        }
    }

    /// Returns `true` if the year of this date is a leap year.
    pub fn leap_year(self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    /// Returns the number of days in the year of this date.
    pub fn year_length(self) -> u16 {
        gregorian::year_length(self.year)
    }

    /// Returns the number of days in the month of this date.
    pub fn month_length(self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }

    /// Converts this date to a [`DayCount`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if the year lies beyond the
    /// representable span of day counts.
    pub fn to_day_count(self) -> Result<DayCount, DomainError> {
        DayCount::from_calendar_time(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Renders `YYYY-MM-DD`, with absolute year and a `BCE` marker for negative
/// years, followed by `HH:MM:SS` unless the time is midnight.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )?;
        if self.is_bce() {
            f.write_str(" BCE")?;
        }
        if !self.is_midnight() {
            write!(f, " {:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        }
        Ok(())
    }
}
