use antiquity_calendar::{CalendarDate, DayCount, Duration};
use antiquity_fuzzy::{DateView, FuzzyDate, FuzzyInput, Granularity};

#[test]
fn year_only_reports_year() {
    let fuzzy = FuzzyDate::from_year(1956).unwrap();
    assert_eq!(fuzzy.date(), DateView::Year(1956));
    assert_eq!(fuzzy.date().granularity(), Granularity::Year);
}

#[test]
fn year_month_reports_year_month() {
    let fuzzy = FuzzyDate::from_year_month(1956, 7).unwrap();
    assert_eq!(fuzzy.date(), DateView::Month(1956, 7));
}

#[test]
fn full_date_reports_full_date() {
    let fuzzy = FuzzyDate::from_ymd(1956, 7, 4.0).unwrap();
    assert_eq!(
        fuzzy.date(),
        DateView::Day(CalendarDate::new(1956, 7, 4).unwrap())
    );
}

#[test]
fn every_month_of_a_year_collapses() {
    for year in [-2, -1, 1, 1900, 1956, 2000] {
        for month in 1..=12u8 {
            let fuzzy = FuzzyDate::from_year_month(year, month).unwrap();
            assert_eq!(
                fuzzy.date(),
                DateView::Month(year, month),
                "{year}-{month} should collapse to a month"
            );
        }
    }
}

#[test]
fn every_year_around_the_era_boundary_collapses() {
    for year in [-401, -101, -5, -2, -1, 1, 2, 4, 100, 400] {
        let fuzzy = FuzzyDate::from_year(year).unwrap();
        assert_eq!(fuzzy.date(), DateView::Year(year), "year {year}");
    }
}

#[test]
fn explicit_window_over_a_whole_year_collapses() {
    let start = DayCount::from_calendar(1812, 1, 1).unwrap();
    let end = DayCount::from_calendar(1813, 1, 1).unwrap();
    let half = (end - start) / 2.0;
    let fuzzy = FuzzyDate::new(start + half, half).unwrap();
    assert_eq!(fuzzy, FuzzyDate::from_year(1812).unwrap());
    assert_eq!(fuzzy.date(), DateView::Year(1812));
}

#[test]
fn widened_window_no_longer_collapses() {
    let fuzzy = FuzzyDate::build(FuzzyInput::YearMonth { year: 1956, month: 7 }, Duration::from_days(1.0))
        .unwrap();
    assert_eq!(fuzzy.date().granularity(), Granularity::Day);
    assert_eq!(fuzzy.date().year(), 1956);
    assert_eq!(fuzzy.date().month(), Some(7));
}

#[test]
fn two_year_window_does_not_collapse() {
    let start = DayCount::from_calendar(1812, 1, 1).unwrap();
    let end = DayCount::from_calendar(1814, 1, 1).unwrap();
    let half = (end - start) / 2.0;
    let fuzzy = FuzzyDate::new(start + half, half).unwrap();
    assert_eq!(fuzzy.date().granularity(), Granularity::Day);
}

#[test]
fn start_and_end_are_stable() {
    let fuzzy = FuzzyDate::from_year_month(1955, 2).unwrap();
    assert_eq!(
        fuzzy.start().days().to_bits(),
        fuzzy.start().days().to_bits()
    );
    assert_eq!(fuzzy.end().days().to_bits(), fuzzy.end().days().to_bits());
    assert_eq!(fuzzy.end() - fuzzy.start(), fuzzy.span());
}

#[test]
fn fuzzy_dates_sort() {
    let mut dates = vec![
        FuzzyDate::from_year(1930).unwrap(),
        FuzzyDate::from_ymd(1820, 5, 1.0).unwrap(),
        FuzzyDate::from_year(1820).unwrap(),
        FuzzyDate::from_year_month(1820, 1).unwrap(),
    ];
    dates.sort();
    let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    assert_eq!(years, vec![1820, 1820, 1820, 1930]);
    assert_eq!(dates[0].date(), DateView::Month(1820, 1));
    assert_eq!(dates[3].date(), DateView::Year(1930));
}

#[test]
fn from_days_bypasses_calendar() {
    let fuzzy = FuzzyDate::from_days(2_329_808.5, Duration::from_days(2.0)).unwrap();
    assert_eq!(fuzzy.center().to_calendar().ymd(), (1666, 9, 12));
    assert_eq!(fuzzy.start().to_calendar().ymd(), (1666, 9, 10));
    assert_eq!(fuzzy.to_string(), "1666-09-12 ± 2 days");
}
