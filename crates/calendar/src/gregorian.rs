//! Proleptic Gregorian calendar rules.
//!
//! All functions take *calendar* years, which have no year zero: -1 is
//! 1 BCE, 1 is 1 CE. The Gregorian leap rule is applied to the
//! astronomical year, so 1 BCE, 5 BCE, 401 BCE, ... are leap years.

use crate::error::DomainError;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days preceding the first of each month in a common year (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Converts a calendar year to astronomical numbering (1 BCE becomes 0).
pub fn astronomical_year(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// Converts an astronomical year back to calendar numbering (0 becomes -1).
pub fn calendar_year(astronomical: i32) -> i32 {
    if astronomical < 1 {
        astronomical - 1
    } else {
        astronomical
    }
}

/// Returns the calendar year following `year`, skipping year zero.
pub fn next_year(year: i32) -> i32 {
    calendar_year(astronomical_year(year) + 1)
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year is a leap year when divisible by 4, except centuries, which are
/// leap years only when divisible by 400.
///
/// # Examples
///
/// ```
/// use antiquity_calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(-1)); // 1 BCE is astronomical year 0
/// ```
pub fn is_leap_year(year: i32) -> bool {
    let y = astronomical_year(year);
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}

/// Returns the number of days in `year`: 366 for leap years, otherwise 365.
pub fn year_length(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_length(year: i32, month: u8) -> Result<u8, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidMonth { month });
    }
    Ok(days_in_month(year, month))
}

/// Returns the 1-based ordinal day within the year for a valid date.
///
/// # Errors
///
/// Returns [`DomainError`] if the date fails [`validate_date`].
pub fn day_of_year(year: i32, month: u8, day: u8) -> Result<u16, DomainError> {
    validate_date(year, month, day)?;
    Ok(ordinal(year, month, day))
}

/// Checks a calendar date, in order: year, month, then day.
///
/// # Errors
///
/// Returns [`DomainError::YearZero`] for year 0,
/// [`DomainError::InvalidMonth`] for a month outside 1..=12, and
/// [`DomainError::InvalidDay`] for a day outside the month.
pub fn validate_date(year: i32, month: u8, day: u8) -> Result<(), DomainError> {
    if year == 0 {
        return Err(DomainError::YearZero);
    }
    let max_day = month_length(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(DomainError::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

/// Month length for a month already known to be in 1..=12.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Ordinal day for a date already known to be valid.
pub(crate) fn ordinal(year: i32, month: u8, day: u8) -> u16 {
    let leap_shift = u16::from(month > 2 && is_leap_year(year));
    DAYS_BEFORE_MONTH[month as usize] + leap_shift + u16::from(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_table() {
        assert!(is_leap_year(1964));
        assert!(!is_leap_year(1963));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn leap_years_bce_use_astronomical_numbering() {
        assert!(is_leap_year(-1)); // year 0
        assert!(is_leap_year(-5)); // year -4
        assert!(!is_leap_year(-4)); // year -3
        assert!(!is_leap_year(-101)); // year -100
        assert!(is_leap_year(-401)); // year -400
    }

    #[test]
    fn year_lengths() {
        assert_eq!(year_length(2011), 365);
        assert_eq!(year_length(2012), 366);
        assert_eq!(year_length(-1), 366);
    }

    #[test]
    fn month_lengths_leap_year() {
        let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &len) in expected.iter().enumerate() {
            let month = i as u8 + 1;
            assert_eq!(
                month_length(1964, month).unwrap(),
                len,
                "month {month} of 1964"
            );
        }
    }

    #[test]
    fn month_length_common_february() {
        assert_eq!(month_length(1963, 2).unwrap(), 28);
    }

    #[test]
    fn month_length_invalid() {
        assert_eq!(
            month_length(2012, 0).unwrap_err(),
            DomainError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            month_length(2012, 13).unwrap_err(),
            DomainError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn validate_order_year_first() {
        assert_eq!(validate_date(0, 13, 40).unwrap_err(), DomainError::YearZero);
        assert_eq!(
            validate_date(2012, 13, 40).unwrap_err(),
            DomainError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn validate_day_bounds() {
        assert!(validate_date(2012, 2, 29).is_ok());
        assert_eq!(
            validate_date(2011, 2, 29).unwrap_err(),
            DomainError::InvalidDay {
                year: 2011,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
        assert!(validate_date(2012, 9, 0).is_err());
        assert!(validate_date(2012, 9, 31).is_err());
    }

    #[test]
    fn day_of_year_bounds() {
        assert_eq!(day_of_year(2011, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2011, 12, 31).unwrap(), 365);
        assert_eq!(day_of_year(2012, 12, 31).unwrap(), 366);
        assert_eq!(day_of_year(2012, 3, 1).unwrap(), 61);
        assert_eq!(day_of_year(1956, 7, 2).unwrap(), 184);
    }

    #[test]
    fn year_numbering_round_trip() {
        assert_eq!(astronomical_year(-1), 0);
        assert_eq!(astronomical_year(1), 1);
        assert_eq!(calendar_year(0), -1);
        assert_eq!(calendar_year(-43), -44);
        for y in [-500, -2, -1, 1, 2, 2024] {
            assert_eq!(calendar_year(astronomical_year(y)), y);
        }
    }

    #[test]
    fn next_year_skips_zero() {
        assert_eq!(next_year(-2), -1);
        assert_eq!(next_year(-1), 1);
        assert_eq!(next_year(1955), 1956);
    }

    #[test]
    fn table_integrity() {
        for m in 1..12usize {
            assert_eq!(
                DAYS_BEFORE_MONTH[m] + DAYS_PER_MONTH[m] as u16,
                DAYS_BEFORE_MONTH[m + 1],
                "DAYS_BEFORE_MONTH mismatch at month {m}"
            );
        }
        assert_eq!(DAYS_BEFORE_MONTH[12] + 31, 365);
    }
}
