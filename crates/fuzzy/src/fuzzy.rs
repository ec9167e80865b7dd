//! Dates with a symmetric uncertainty radius.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use antiquity_calendar::{
    CalendarDate, DayCount, Duration, astronomical_year, month_length, next_year,
    validate_date, year_length,
};
use tracing::debug;

use crate::error::FuzzyError;
use crate::input::FuzzyInput;
use crate::view::DateView;

/// An event known to have occurred at `center ± fuzziness`.
///
/// Both fields are fixed at construction; [`start`](Self::start) and
/// [`end`](Self::end) are recomputed on every call and are always
/// representable day counts.
///
/// Ordering is by center, then by fuzziness.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyDate {
    center: DayCount,
    fuzziness: Duration,
}

impl FuzzyDate {
    /// Creates a fuzzy date from an explicit center and radius.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidFuzziness`] if `fuzziness` is negative or
    /// not finite, and [`FuzzyError::Domain`] if either end of the window
    /// falls outside the representable range.
    pub fn new(center: DayCount, fuzziness: Duration) -> Result<Self, FuzzyError> {
        check_fuzziness(fuzziness)?;
        center.checked_sub(fuzziness)?;
        center.checked_add(fuzziness)?;
        Ok(Self {
            center,
            fuzziness: fuzziness + Duration::ZERO,
        })
    }

    /// Resolves a partial date into a center and default radius, widens the
    /// radius by `extra`, and builds the fuzzy date.
    ///
    /// | Input | Center | Default radius |
    /// |-------|--------|----------------|
    /// | `Days` | the given day count | 0 |
    /// | `Year` | midpoint of the year | half the year length |
    /// | `YearMonth` | midpoint of the month | half the month length |
    /// | `YearMonthDay` | that instant | 0 |
    ///
    /// # Errors
    ///
    /// Calendar failures (year zero, bad month, bad day) are returned as
    /// [`FuzzyError::Domain`] exactly as the day-count core reports them.
    /// A negative or non-finite `extra` is [`FuzzyError::InvalidFuzziness`].
    ///
    /// # Examples
    ///
    /// ```
    /// use antiquity_calendar::Duration;
    /// use antiquity_fuzzy::{DateView, FuzzyDate, FuzzyInput};
    ///
    /// let summer = FuzzyDate::build(FuzzyInput::YearMonth { year: 1956, month: 7 }, Duration::ZERO)
    ///     .unwrap();
    /// assert_eq!(summer.date(), DateView::Month(1956, 7));
    /// assert_eq!(summer.fuzziness(), Duration::from_days(15.5));
    /// ```
    pub fn build(input: FuzzyInput, extra: Duration) -> Result<Self, FuzzyError> {
        check_fuzziness(extra)?;
        let (center, default) = resolve(input)?;
        debug!(
            ?input,
            center = center.days(),
            default_fuzziness = default.as_days(),
            extra = extra.as_days(),
            "resolved fuzzy date"
        );
        Self::new(center, default + extra)
    }

    /// A fuzzy date at an explicit Julian Date.
    ///
    /// # Errors
    ///
    /// See [`FuzzyDate::build`].
    pub fn from_days(days: f64, fuzziness: Duration) -> Result<Self, FuzzyError> {
        Self::build(FuzzyInput::Days { days }, fuzziness)
    }

    /// A date known only to the year.
    ///
    /// # Errors
    ///
    /// See [`FuzzyDate::build`].
    pub fn from_year(year: i32) -> Result<Self, FuzzyError> {
        Self::build(FuzzyInput::Year { year }, Duration::ZERO)
    }

    /// A date known only to the month.
    ///
    /// # Errors
    ///
    /// See [`FuzzyDate::build`].
    pub fn from_year_month(year: i32, month: u8) -> Result<Self, FuzzyError> {
        Self::build(FuzzyInput::YearMonth { year, month }, Duration::ZERO)
    }

    /// A full date with no uncertainty; a fractional `day` sets the time of day.
    ///
    /// # Errors
    ///
    /// See [`FuzzyDate::build`].
    pub fn from_ymd(year: i32, month: u8, day: f64) -> Result<Self, FuzzyError> {
        Self::build(FuzzyInput::YearMonthDay { year, month, day }, Duration::ZERO)
    }

    /// Returns the center of the window.
    pub fn center(&self) -> DayCount {
        self.center
    }

    /// Returns the uncertainty radius.
    pub fn fuzziness(&self) -> Duration {
        self.fuzziness
    }

    /// Returns the earliest instant in the window.
    pub fn start(&self) -> DayCount {
        self.center - self.fuzziness
    }

    /// Returns the latest instant in the window.
    pub fn end(&self) -> DayCount {
        self.center + self.fuzziness
    }

    /// Returns the full width of the window.
    pub fn span(&self) -> Duration {
        self.fuzziness * 2.0
    }

    /// Returns the calendar year of the center.
    pub fn year(&self) -> i32 {
        self.center.year()
    }

    /// Returns the month of the center.
    pub fn month(&self) -> u8 {
        self.center.month()
    }

    /// Returns the day of the month of the center.
    pub fn day(&self) -> u8 {
        self.center.day()
    }

    /// Returns `true` if `instant` lies within the window, ends included.
    pub fn contains(&self, instant: DayCount) -> bool {
        self.start() <= instant && instant <= self.end()
    }

    /// Returns `true` if the two windows share at least one instant.
    pub fn overlaps(&self, other: &FuzzyDate) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Returns a copy with the radius widened by `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError`] if `extra` is invalid or the wider window
    /// leaves the representable range.
    pub fn widen(&self, extra: Duration) -> Result<Self, FuzzyError> {
        check_fuzziness(extra)?;
        Self::new(self.center, self.fuzziness + extra)
    }

    /// Returns a copy with the center shifted by `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::Domain`] if the shifted window leaves the
    /// representable range.
    pub fn checked_add(&self, offset: Duration) -> Result<Self, FuzzyError> {
        Self::new(self.center.checked_add(offset)?, self.fuzziness)
    }

    /// Returns the best-guess calendar date.
    ///
    /// When the window runs from midnight on January 1 to midnight on
    /// January 1 of the next year, only the year is reported. When it runs
    /// from midnight on the 1st to midnight on the 1st of the next month,
    /// only year and month are reported. Otherwise the full date of the
    /// center is reported.
    pub fn date(&self) -> DateView {
        let start = self.start().to_calendar();
        let end = self.end().to_calendar();
        if starts_a_month(start) && starts_a_month(end) {
            if start.month() == 1 && end.month() == 1 && next_year(start.year()) == end.year() {
                return DateView::Year(start.year());
            }
            if month_index(end) - month_index(start) == 1 {
                return DateView::Month(start.year(), start.month());
            }
        }
        DateView::Day(self.center.to_calendar())
    }
}

/// Center and default radius implied by each kind of input.
fn resolve(input: FuzzyInput) -> Result<(DayCount, Duration), FuzzyError> {
    match input {
        FuzzyInput::Days { days } => Ok((DayCount::from_days(days)?, Duration::ZERO)),
        FuzzyInput::Year { year } => {
            let start = DayCount::from_calendar(year, 1, 1)?;
            let half = Duration::from_days(f64::from(year_length(year)) / 2.0);
            Ok((start.checked_add(half)?, half))
        }
        FuzzyInput::YearMonth { year, month } => {
            let start = DayCount::from_calendar(year, month, 1)?;
            let half = Duration::from_days(f64::from(month_length(year, month)?) / 2.0);
            Ok((start.checked_add(half)?, half))
        }
        FuzzyInput::YearMonthDay { year, month, day } => {
            validate_date(year, month, 1)?;
            if !day.is_finite() || !(1.0..32.0).contains(&day) {
                return Err(FuzzyError::InvalidDay { day });
            }
            let whole = day.trunc();
            let midnight = DayCount::from_calendar(year, month, whole as u8)?;
            let center = midnight.checked_add(Duration::from_days(day - whole))?;
            Ok((center, Duration::ZERO))
        }
    }
}

fn check_fuzziness(fuzziness: Duration) -> Result<(), FuzzyError> {
    if !fuzziness.is_finite() || fuzziness.is_negative() {
        return Err(FuzzyError::InvalidFuzziness {
            days: fuzziness.as_days(),
        });
    }
    Ok(())
}

fn starts_a_month(date: CalendarDate) -> bool {
    date.day() == 1 && date.is_midnight()
}

/// Months since an arbitrary origin, continuous across 1 BCE / 1 CE.
fn month_index(date: CalendarDate) -> i64 {
    i64::from(astronomical_year(date.year())) * 12 + i64::from(date.month())
}

impl PartialEq for FuzzyDate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FuzzyDate {}

impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FuzzyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.center
            .cmp(&other.center)
            .then_with(|| self.fuzziness.total_cmp(&other.fuzziness))
    }
}

impl Hash for FuzzyDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        self.fuzziness.as_days().to_bits().hash(state);
    }
}

/// Shifts the center. Panics if the window leaves the representable range;
/// use [`FuzzyDate::checked_add`] to handle that case.
impl Add<Duration> for FuzzyDate {
    type Output = FuzzyDate;

    fn add(self, rhs: Duration) -> FuzzyDate {
        self.checked_add(rhs).expect("fuzzy date shift out of range")
    }
}

/// Renders the best-guess date followed by `± N days`.
impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.date(), self.fuzziness)
    }
}
