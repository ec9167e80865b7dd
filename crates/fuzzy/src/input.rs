//! Construction inputs for fuzzy dates.

/// What is known about a date, from a bare day count down to a year.
///
/// Each variant resolves to a center and a default radius covering the
/// implied period; see [`FuzzyDate::build`](crate::FuzzyDate::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuzzyInput {
    /// An explicit Julian Date; the default radius is zero.
    Days {
        /// Julian Date of the center.
        days: f64,
    },
    /// Only the year is known; the period is the whole year.
    Year {
        /// Calendar year (never zero).
        year: i32,
    },
    /// Year and month are known; the period is the whole month.
    YearMonth {
        /// Calendar year (never zero).
        year: i32,
        /// Month (1..=12).
        month: u8,
    },
    /// A full date. A fractional `day` carries the time of day, so
    /// `4.5` means noon on the 4th. The default radius is zero.
    YearMonthDay {
        /// Calendar year (never zero).
        year: i32,
        /// Month (1..=12).
        month: u8,
        /// Day of the month, possibly fractional.
        day: f64,
    },
}

impl FuzzyInput {
    /// Returns the granularity this input was given at.
    pub fn granularity(&self) -> Granularity {
        match self {
            FuzzyInput::Days { .. } | FuzzyInput::YearMonthDay { .. } => Granularity::Day,
            FuzzyInput::YearMonth { .. } => Granularity::Month,
            FuzzyInput::Year { .. } => Granularity::Year,
        }
    }
}

/// The coarsest calendar unit a fuzzy date is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Day,
    Month,
    Year,
}
