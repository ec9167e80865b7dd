//! Signed spans of time measured in fractional days.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

const HOURS_PER_DAY: f64 = 24.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// A signed span of time, stored as fractional days.
///
/// `Duration` is the only thing that can be added to or subtracted from a
/// [`DayCount`](crate::DayCount); subtracting two day counts yields one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Duration {
    days: f64,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Self = Self { days: 0.0 };

    /// Creates a span of `days` days.
    pub const fn from_days(days: f64) -> Self {
        Self { days }
    }

    /// Creates a span of `hours` hours.
    pub fn from_hours(hours: f64) -> Self {
        Self::from_days(hours / HOURS_PER_DAY)
    }

    /// Creates a span of `minutes` minutes.
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_days(minutes / MINUTES_PER_DAY)
    }

    /// Creates a span of `seconds` seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_days(seconds / SECONDS_PER_DAY)
    }

    /// Returns the span in days.
    pub const fn as_days(self) -> f64 {
        self.days
    }

    /// Returns the span in hours.
    pub fn as_hours(self) -> f64 {
        self.days * HOURS_PER_DAY
    }

    /// Returns the span in seconds.
    pub fn as_seconds(self) -> f64 {
        self.days * SECONDS_PER_DAY
    }

    /// Returns the magnitude of the span.
    pub fn abs(self) -> Self {
        Self::from_days(self.days.abs())
    }

    /// Returns `true` if the span points backwards in time.
    pub fn is_negative(self) -> bool {
        self.days < 0.0
    }

    /// Returns `true` if the span is finite.
    pub fn is_finite(self) -> bool {
        self.days.is_finite()
    }

    /// Total order over spans, following [`f64::total_cmp`].
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.days.total_cmp(&other.days)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_days(self.days + rhs.days)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_days(self.days - rhs.days)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_days(-self.days)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_days(self.days * rhs)
    }
}

impl Div<f64> for Duration {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_days(self.days / rhs)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_constructors() {
        assert_abs_diff_eq!(Duration::from_hours(36.0).as_days(), 1.5);
        assert_abs_diff_eq!(Duration::from_minutes(720.0).as_days(), 0.5);
        assert_abs_diff_eq!(Duration::from_seconds(86_400.0).as_days(), 1.0);
        assert_abs_diff_eq!(Duration::from_days(2.0).as_hours(), 48.0);
        assert_abs_diff_eq!(Duration::from_days(0.25).as_seconds(), 21_600.0);
    }

    #[test]
    fn arithmetic() {
        let a = Duration::from_days(3.0);
        let b = Duration::from_days(1.5);
        assert_eq!(a + b, Duration::from_days(4.5));
        assert_eq!(a - b, Duration::from_days(1.5));
        assert_eq!(-a, Duration::from_days(-3.0));
        assert_eq!(a * 2.0, Duration::from_days(6.0));
        assert_eq!(a / 2.0, Duration::from_days(1.5));
    }

    #[test]
    fn sign_and_magnitude() {
        let back = Duration::from_days(-2.0);
        assert!(back.is_negative());
        assert_eq!(back.abs(), Duration::from_days(2.0));
        assert!(!Duration::ZERO.is_negative());
    }

    #[test]
    fn ordering() {
        assert!(Duration::from_days(1.0) < Duration::from_days(2.0));
        assert_eq!(
            Duration::from_days(1.0).total_cmp(&Duration::from_days(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn display() {
        assert_eq!(Duration::from_days(183.0).to_string(), "183 days");
        assert_eq!(Duration::from_days(15.5).to_string(), "15.5 days");
    }
}
