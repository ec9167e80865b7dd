//! Continuous day counts anchored to the Julian Day convention.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::date::CalendarDate;
use crate::duration::{Duration, SECONDS_PER_DAY};
use crate::error::DomainError;
use crate::gregorian;
use crate::weekday::Weekday;

/// Largest magnitude accepted for a day count (roughly 270 million years).
pub const MAX_ABS_DAYS: f64 = 1e11;

/// Julian Date of the Modified Julian Day epoch, 1858-11-17 00:00.
pub const MJD_EPOCH: f64 = 2_400_000.5;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const SECONDS_PER_DAY_I: i64 = 86_400;

/// A point in continuous time, as fractional days of the Julian Date.
///
/// Integer values fall on noon; the civil day of Julian Day Number `n`
/// starts at `n - 0.5`. Values are always finite and within
/// ±[`MAX_ABS_DAYS`], and are totally ordered.
///
/// Only a [`Duration`] may be added to a day count. Adding two day counts
/// does not compile:
///
/// ```compile_fail
/// use antiquity_calendar::DayCount;
///
/// let a = DayCount::from_days(1.0).unwrap();
/// let b = DayCount::from_days(2.0).unwrap();
/// let _ = a + b;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DayCount {
    days: f64,
}

impl DayCount {
    /// Creates a day count from a raw Julian Date.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFinite`] for NaN or infinities and
    /// [`DomainError::OutOfRange`] beyond ±[`MAX_ABS_DAYS`].
    pub fn from_days(days: f64) -> Result<Self, DomainError> {
        if !days.is_finite() {
            return Err(DomainError::NonFinite { days });
        }
        if days.abs() > MAX_ABS_DAYS {
            return Err(DomainError::OutOfRange { days });
        }
        // Adding zero folds -0.0 into 0.0 so equality and hashing agree.
        Ok(Self { days: days + 0.0 })
    }

    /// Creates a day count from a Modified Julian Day.
    ///
    /// # Errors
    ///
    /// Same as [`DayCount::from_days`].
    pub fn from_modified_julian_day(mjd: f64) -> Result<Self, DomainError> {
        Self::from_days(mjd + MJD_EPOCH)
    }

    /// Creates a day count at midnight of the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::YearZero`], [`DomainError::InvalidMonth`] or
    /// [`DomainError::InvalidDay`] for an invalid date, checked in that
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use antiquity_calendar::DayCount;
    ///
    /// let fire = DayCount::from_calendar(1666, 9, 12).unwrap();
    /// assert_eq!(fire.days(), 2_329_808.5);
    /// ```
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        Self::from_calendar_time(year, month, day, 0, 0, 0)
    }

    /// Creates a day count at the given calendar date and time of day.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for any out-of-range component, or
    /// [`DomainError::OutOfRange`] if the year lies beyond the representable
    /// span.
    pub fn from_calendar_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DomainError> {
        CalendarDate::with_time(year, month, day, hour, minute, second)?;
        let jdn = julian_day_number(year, month, day);
        let seconds = i64::from(hour) * 3_600 + i64::from(minute) * 60 + i64::from(second);
        Self::from_days(jdn as f64 - 0.5 + seconds as f64 / SECONDS_PER_DAY)
    }

    /// Returns the raw Julian Date.
    pub fn days(self) -> f64 {
        self.days
    }

    /// Returns the Modified Julian Day (`days - 2400000.5`).
    pub fn modified_julian_day(self) -> f64 {
        self.days - MJD_EPOCH
    }

    /// Returns the Julian Day Number of the civil day containing this instant.
    pub fn julian_day_number(self) -> i64 {
        self.split().0
    }

    /// Converts to a proleptic Gregorian date and time of day.
    ///
    /// Time of day is rounded to the nearest whole second; rounding up to
    /// midnight rolls over into the next day.
    pub fn to_calendar(self) -> CalendarDate {
        let (jdn, second_of_day) = self.split();
        let (year, month, day) = civil_from_jdn(jdn);
        let hour = (second_of_day / 3_600) as u8;
        let minute = (second_of_day % 3_600 / 60) as u8;
        let second = (second_of_day % 60) as u8;
        CalendarDate::from_parts(year, month, day, hour, minute, second)
    }

    /// Returns the calendar year (never zero).
    pub fn year(self) -> i32 {
        self.to_calendar().year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.to_calendar().month()
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.to_calendar().day()
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.to_calendar().hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.to_calendar().minute()
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.to_calendar().second()
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_day_number(self.julian_day_number())
    }

    /// Returns the ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn isoweekday(self) -> u8 {
        self.weekday().number_from_monday()
    }

    /// Returns `true` if this instant falls in a leap year.
    pub fn leap_year(self) -> bool {
        self.to_calendar().leap_year()
    }

    /// Returns the length of the year containing this instant.
    pub fn year_length(self) -> u16 {
        self.to_calendar().year_length()
    }

    /// Returns the length of the month containing this instant.
    pub fn month_length(self) -> u8 {
        self.to_calendar().month_length()
    }

    /// Returns the century containing this instant.
    pub fn century(self) -> i32 {
        self.to_calendar().century()
    }

    /// Shifts this instant by `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the result is not finite or out of range.
    pub fn checked_add(self, duration: Duration) -> Result<Self, DomainError> {
        Self::from_days(self.days + duration.as_days())
    }

    /// Shifts this instant back by `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the result is not finite or out of range.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, DomainError> {
        Self::from_days(self.days - duration.as_days())
    }

    /// Returns the span from `earlier` to `self`.
    pub fn since(self, earlier: Self) -> Duration {
        Duration::from_days(self.days - earlier.days)
    }

    /// Splits into civil day number and whole second within that day.
    fn split(self) -> (i64, u32) {
        let total = ((self.days + 0.5) * SECONDS_PER_DAY).round() as i64;
        (
            total.div_euclid(SECONDS_PER_DAY_I),
            total.rem_euclid(SECONDS_PER_DAY_I) as u32,
        )
    }
}

/// Fliegel–Van Flandern transform from a valid calendar date to a Julian
/// Day Number.
pub(crate) fn julian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let a = (14 - month) / 12;
    let y = i64::from(gregorian::astronomical_year(year)) + 4_800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Inverse transform from a Julian Day Number to `(year, month, day)`.
pub(crate) fn civil_from_jdn(jdn: i64) -> (i32, u8, u8) {
    let j = jdn + 32_044;
    let g = j.div_euclid(DAYS_PER_400_YEARS);
    let dg = j.rem_euclid(DAYS_PER_400_YEARS);
    let c = (dg / DAYS_PER_100_YEARS + 1) * 3 / 4;
    let dc = dg - c * DAYS_PER_100_YEARS;
    let b = dc / DAYS_PER_4_YEARS;
    let db = dc % DAYS_PER_4_YEARS;
    let a = (db / 365 + 1) * 3 / 4;
    let da = db - a * 365;
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / 153 - 2;
    let d = da - (m + 4) * 153 / 5 + 122;
    let astronomical = y - 4_800 + (m + 2) / 12;
    let month = (m + 2) % 12 + 1;
    (
        gregorian::calendar_year(astronomical as i32),
        month as u8,
        (d + 1) as u8,
    )
}

impl PartialEq for DayCount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DayCount {}

impl PartialOrd for DayCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days.total_cmp(&other.days)
    }
}

impl Hash for DayCount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.days.to_bits().hash(state);
    }
}

/// Panics if the result is out of range; use [`DayCount::checked_add`] to
/// handle that case.
impl Add<Duration> for DayCount {
    type Output = DayCount;

    fn add(self, rhs: Duration) -> DayCount {
        self.checked_add(rhs).expect("day count addition out of range")
    }
}

/// Panics if the result is out of range; use [`DayCount::checked_sub`] to
/// handle that case.
impl Sub<Duration> for DayCount {
    type Output = DayCount;

    fn sub(self, rhs: Duration) -> DayCount {
        self.checked_sub(rhs).expect("day count subtraction out of range")
    }
}

impl Sub for DayCount {
    type Output = Duration;

    fn sub(self, rhs: DayCount) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_calendar(), f)
    }
}
