//! Date command: calendar date -> Julian Date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use antiquity_calendar::DayCount;

use crate::cli::DateArgs;
use crate::config::AntiquityConfig;
use crate::convert;

/// Convert a calendar date to a day count and print it.
pub fn run(args: DateArgs, config: &AntiquityConfig) -> Result<()> {
    let _cmd = info_span!("date").entered();
    let dc = DayCount::from_calendar_time(
        args.year,
        args.month,
        args.day,
        args.hour,
        args.minute,
        args.second,
    )
    .with_context(|| {
        format!(
            "invalid calendar date: {}-{}-{} {}:{}:{}",
            args.year, args.month, args.day, args.hour, args.minute, args.second
        )
    })?;
    info!(date = %dc.to_calendar(), days = dc.days(), "calendar date converted");

    println!("{}", convert::describe_julian(dc, &config.output));
    Ok(())
}
