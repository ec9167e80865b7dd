//! # antiquity-fuzzy
//!
//! Imprecise dates: a [`DayCount`](antiquity_calendar::DayCount) center plus
//! a symmetric uncertainty radius.
//!
//! ## Architecture
//!
//! ```text
//! FuzzyDate::build(input, extra)
//!   ├─ resolve()            center + default radius per FuzzyInput variant
//!   │    ├─ Days            → (days, 0)
//!   │    ├─ Year            → (mid-year, year_length / 2)
//!   │    ├─ YearMonth       → (mid-month, month_length / 2)
//!   │    └─ YearMonthDay    → (that instant, 0)
//!   └─ FuzzyDate::new()     radius = default + extra, window range-checked
//!
//! FuzzyDate::date()         collapses to Year / Month when the window is
//!                           exactly one calendar year / month
//! ```
//!
//! ## Quick start
//!
//! ```
//! use antiquity_fuzzy::{DateView, FuzzyDate};
//!
//! let year = FuzzyDate::from_year(1956).unwrap();
//! assert_eq!(year.date(), DateView::Year(1956));
//! assert_eq!(year.to_string(), "1956 ± 183 days");
//!
//! let day = FuzzyDate::from_ymd(1956, 7, 4.0).unwrap();
//! assert!(year.contains(day.center()));
//! ```

pub mod error;
pub mod input;
pub mod view;

mod fuzzy;

pub use error::FuzzyError;
pub use fuzzy::FuzzyDate;
pub use input::{FuzzyInput, Granularity};
pub use view::DateView;
