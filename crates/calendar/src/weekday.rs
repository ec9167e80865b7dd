//! Days of the week.

use std::fmt;

/// A day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Returns the weekday for a civil day number.
    ///
    /// Julian Day Number 0 fell on a Monday, so the residue modulo 7 indexes
    /// directly into a Monday-first week.
    pub fn from_day_number(jdn: i64) -> Self {
        ALL[jdn.rem_euclid(7) as usize]
    }

    /// Zero-based index with Monday = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// ISO weekday number with Monday = 1 and Sunday = 7.
    pub fn number_from_monday(self) -> u8 {
        self.index() + 1
    }

    /// English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_zero_is_monday() {
        assert_eq!(Weekday::from_day_number(0), Weekday::Monday);
        assert_eq!(Weekday::from_day_number(6), Weekday::Sunday);
        assert_eq!(Weekday::from_day_number(7), Weekday::Monday);
    }

    #[test]
    fn negative_day_numbers_wrap() {
        assert_eq!(Weekday::from_day_number(-1), Weekday::Sunday);
        assert_eq!(Weekday::from_day_number(-7), Weekday::Monday);
    }

    #[test]
    fn millennium_was_a_saturday() {
        // 2000-01-01 is JDN 2451545
        assert_eq!(Weekday::from_day_number(2_451_545), Weekday::Saturday);
    }

    #[test]
    fn iso_numbers() {
        assert_eq!(Weekday::Monday.number_from_monday(), 1);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        assert_eq!(Weekday::Thursday.index(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
