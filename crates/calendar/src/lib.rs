//! # antiquity-calendar
//!
//! Conversion between continuous Julian Day counts and proleptic Gregorian
//! calendar dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day, h, m, s)"] -->|"DayCount::from_calendar_time()"| B["DayCount"]
//!     B -->|".to_calendar()"| C["CalendarDate"]
//!     B -->|"+ / - Duration"| B
//!     B -->|"DayCount - DayCount"| D["Duration"]
//!     C -->|".to_day_count()"| B
//!     E["is_leap_year / month_length"] --> C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use antiquity_calendar::{DayCount, Duration, Weekday, is_leap_year};
//!
//! // Calendar date to Julian Date (midnight falls on the half day)
//! let october = DayCount::from_calendar(1917, 11, 7).unwrap();
//! assert_eq!(october.days(), 2_421_539.5);
//! assert_eq!(october.weekday(), Weekday::Wednesday);
//!
//! // And back again
//! let date = october.to_calendar();
//! assert_eq!(date.ymd(), (1917, 11, 7));
//!
//! // Duration arithmetic
//! let later = october + Duration::from_days(10.0);
//! assert_eq!(later - october, Duration::from_days(10.0));
//!
//! // There is no year zero: 1 BCE is year -1 and is a leap year
//! assert!(is_leap_year(-1));
//! assert!(DayCount::from_calendar(0, 1, 1).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years, year and month lengths, date validation |
//! | `day_count` | Julian Day value type and the Fliegel–Van Flandern transforms |
//! | `date` | Broken-down calendar date with time of day |
//! | `duration` | Signed spans in fractional days |
//! | `weekday` | Day-of-week enumeration |
//! | `error` | Error types |

mod date;
mod day_count;
mod duration;
mod error;
mod gregorian;
mod weekday;

pub use date::CalendarDate;
pub use day_count::{DayCount, MAX_ABS_DAYS, MJD_EPOCH};
pub use duration::Duration;
pub use error::DomainError;
pub use gregorian::{
    astronomical_year, calendar_year, day_of_year, is_leap_year, month_length, next_year,
    validate_date, year_length,
};
pub use weekday::Weekday;
