//! Best-guess calendar view of a fuzzy date.

use std::fmt;

use antiquity_calendar::CalendarDate;

use crate::input::Granularity;

/// A calendar date reported only as precisely as its uncertainty allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateView {
    /// The uncertainty spans exactly one calendar year.
    Year(i32),
    /// The uncertainty spans exactly one calendar month.
    Month(i32, u8),
    /// Anything else: the full date of the center.
    Day(CalendarDate),
}

impl DateView {
    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        match *self {
            DateView::Year(year) | DateView::Month(year, _) => year,
            DateView::Day(date) => date.year(),
        }
    }

    /// Returns the month, unless only the year is reported.
    pub fn month(&self) -> Option<u8> {
        match *self {
            DateView::Year(_) => None,
            DateView::Month(_, month) => Some(month),
            DateView::Day(date) => Some(date.month()),
        }
    }

    /// Returns the day, if the full date is reported.
    pub fn day(&self) -> Option<u8> {
        match *self {
            DateView::Day(date) => Some(date.day()),
            _ => None,
        }
    }

    /// Returns the granularity of this view.
    pub fn granularity(&self) -> Granularity {
        match self {
            DateView::Year(_) => Granularity::Year,
            DateView::Month(..) => Granularity::Month,
            DateView::Day(_) => Granularity::Day,
        }
    }
}

impl fmt::Display for DateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, rest) = match *self {
            DateView::Year(year) => (year, None),
            DateView::Month(year, month) => (year, Some(month)),
            DateView::Day(date) => return fmt::Display::fmt(&date, f),
        };
        write!(f, "{}", year.unsigned_abs())?;
        if let Some(month) = rest {
            write!(f, "-{month:02}")?;
        }
        if year < 0 {
            f.write_str(" BCE")?;
        }
        Ok(())
    }
}
