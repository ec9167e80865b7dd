//! Error types for the antiquity-fuzzy crate.

use antiquity_calendar::DomainError;

/// Error type for all fallible operations in the antiquity-fuzzy crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzyError {
    /// A calendar or day-count failure, passed through unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Returned when the uncertainty radius is negative, NaN or infinite.
    #[error("fuzziness must be finite and non-negative, got {days} days")]
    InvalidFuzziness {
        /// The rejected radius in days.
        days: f64,
    },

    /// Returned when a fractional day cannot name a day of the month.
    #[error("invalid fractional day: {day} (must be finite, >= 1 and < 32)")]
    InvalidDay {
        /// The rejected day value.
        day: f64,
    },
}
