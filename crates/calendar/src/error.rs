//! Error types for the antiquity-calendar crate.

/// Error type for all fallible operations in the antiquity-calendar crate.
///
/// Every variant is a deterministic input-validation failure raised at
/// construction time. No partially built value is ever returned alongside
/// one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Returned when a calendar year of zero is supplied.
    ///
    /// Calendar years run ..., -2, -1, 1, 2, ... with -1 meaning 1 BCE.
    #[error("no year zero")]
    YearZero,

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is outside the days of the given month.
    #[error("invalid day: {day} for {year}-{month} (max {max_day})")]
    InvalidDay {
        /// The calendar year the day was checked against.
        year: i32,
        /// The month the day was checked against.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The number of days in that month.
        max_day: u8,
    },

    /// Returned when an hour is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when a minute is outside 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute that was provided.
        minute: u8,
    },

    /// Returned when a second is outside 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second that was provided.
        second: u8,
    },

    /// Returned when a day count is NaN or infinite.
    #[error("day count must be finite, got {days}")]
    NonFinite {
        /// The rejected day count.
        days: f64,
    },

    /// Returned when a day count lies outside the representable range.
    #[error("day count {days} is out of range (max magnitude {max})", max = crate::day_count::MAX_ABS_DAYS)]
    OutOfRange {
        /// The rejected day count.
        days: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_zero() {
        assert_eq!(DomainError::YearZero.to_string(), "no year zero");
    }

    #[test]
    fn error_invalid_month() {
        let err = DomainError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = DomainError::InvalidDay {
            year: 2011,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2011-2 (max 28)");
    }

    #[test]
    fn error_invalid_time_fields() {
        assert_eq!(
            DomainError::InvalidHour { hour: 24 }.to_string(),
            "invalid hour: 24 (must be 0..=23)"
        );
        assert_eq!(
            DomainError::InvalidMinute { minute: 60 }.to_string(),
            "invalid minute: 60 (must be 0..=59)"
        );
        assert_eq!(
            DomainError::InvalidSecond { second: 61 }.to_string(),
            "invalid second: 61 (must be 0..=59)"
        );
    }

    #[test]
    fn error_non_finite() {
        let err = DomainError::NonFinite { days: f64::NAN };
        assert_eq!(err.to_string(), "day count must be finite, got NaN");
    }

    #[test]
    fn error_out_of_range() {
        let err = DomainError::OutOfRange { days: 1e12 };
        assert!(err.to_string().starts_with("day count 1000000000000 is out of range"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DomainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DomainError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = DomainError::InvalidMonth { month: 0 };
        let b = DomainError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = DomainError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
