//! Days command: Julian Date (or MJD) -> calendar date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use antiquity_calendar::DayCount;

use crate::cli::DaysArgs;
use crate::config::AntiquityConfig;
use crate::convert;

/// Convert a day count to a calendar date and print it.
pub fn run(args: DaysArgs, config: &AntiquityConfig) -> Result<()> {
    let _cmd = info_span!("days").entered();
    let parsed = if args.mjd {
        DayCount::from_modified_julian_day(args.days)
    } else {
        DayCount::from_days(args.days)
    };
    let dc = parsed.with_context(|| format!("invalid day count: {}", args.days))?;
    info!(days = dc.days(), mjd = args.mjd, "day count parsed");

    println!("{}", convert::describe_calendar(dc, &config.output));
    Ok(())
}
