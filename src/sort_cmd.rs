//! Sort command: order partial dates chronologically.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use antiquity_fuzzy::FuzzyDate;

use crate::cli::SortArgs;
use crate::config::AntiquityConfig;
use crate::convert;

/// Parse every date, sort by center then fuzziness, and print one per line.
pub fn run(args: SortArgs, config: &AntiquityConfig) -> Result<()> {
    let _cmd = info_span!("sort").entered();
    let extra = convert::extra_fuzziness(&config.fuzzy, None)?;

    let mut dates = args
        .dates
        .iter()
        .map(|s| {
            let input = convert::parse_date(s)?;
            FuzzyDate::build(input, extra).with_context(|| format!("invalid fuzzy date: {s:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    dates.sort();
    debug!(n = dates.len(), "dates sorted");

    for date in &dates {
        println!("{date}");
    }
    Ok(())
}
