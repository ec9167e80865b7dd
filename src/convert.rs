//! Pure conversion functions: CLI strings and TOML config -> library types.

use anyhow::{Context, Result, bail};

use antiquity_calendar::{DayCount, Duration};
use antiquity_fuzzy::FuzzyInput;

use crate::config::{FuzzyToml, OutputToml};

/// Parses `YEAR`, `YEAR-MM` or `YEAR-MM-DD[.fraction]` into a [`FuzzyInput`].
///
/// Years before the common era are written with a leading `-` or a trailing
/// `BCE`; both forms count without a year zero, so `-1` and `1 BCE` agree.
/// Range checks are left to the library.
pub fn parse_date(s: &str) -> Result<FuzzyInput> {
    let trimmed = s.trim();
    let (body, bce) = match trimmed.strip_suffix("BCE") {
        Some(rest) => (rest.trim_end(), true),
        None => match trimmed.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        },
    };

    let parts: Vec<&str> = body.split('-').collect();
    let year_abs: i32 = parts[0]
        .parse()
        .with_context(|| format!("invalid year in date {s:?}"))?;
    let year = if bce { -year_abs } else { year_abs };

    match parts.as_slice() {
        [_] => Ok(FuzzyInput::Year { year }),
        [_, month] => Ok(FuzzyInput::YearMonth {
            year,
            month: parse_month(month, s)?,
        }),
        [_, month, day] => {
            let day: f64 = day
                .parse()
                .with_context(|| format!("invalid day in date {s:?}"))?;
            Ok(FuzzyInput::YearMonthDay {
                year,
                month: parse_month(month, s)?,
                day,
            })
        }
        _ => bail!("expected YEAR, YEAR-MM or YEAR-MM-DD, got {s:?}"),
    }
}

fn parse_month(month: &str, s: &str) -> Result<u8> {
    month
        .parse()
        .with_context(|| format!("invalid month in date {s:?}"))
}

/// Resolves the extra fuzziness: the CLI value wins over `[fuzzy].extra_days`.
pub fn extra_fuzziness(fuzzy: &FuzzyToml, cli: Option<f64>) -> Result<Duration> {
    let days = cli.unwrap_or(fuzzy.extra_days);
    if !days.is_finite() || days < 0.0 {
        bail!("extra fuzziness must be a non-negative number of days, got {days}");
    }
    Ok(Duration::from_days(days))
}

/// Renders a day count as a calendar date, with the optional extras from
/// `[output]`.
pub fn describe_calendar(dc: DayCount, output: &OutputToml) -> String {
    let date = dc.to_calendar();
    let shown = if output.show_time {
        date
    } else {
        date.at_midnight()
    };
    let mut text = shown.to_string();
    push_extras(&mut text, dc, output);
    text
}

/// Renders a day count as a Julian Date, with the optional extras from
/// `[output]`.
pub fn describe_julian(dc: DayCount, output: &OutputToml) -> String {
    let mut text = format!("JD {}", dc.days());
    push_extras(&mut text, dc, output);
    text
}

fn push_extras(text: &mut String, dc: DayCount, output: &OutputToml) {
    if output.show_weekday {
        text.push_str(&format!(" ({})", dc.weekday()));
    }
    if output.show_mjd {
        text.push_str(&format!(" [MJD {}]", dc.modified_julian_day()));
    }
}
