//! Fuzzy command: partial date -> center, radius and window.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use antiquity_fuzzy::FuzzyDate;

use crate::cli::FuzzyArgs;
use crate::config::AntiquityConfig;
use crate::convert;

/// Build a fuzzy date and print its best-guess date and window.
pub fn run(args: FuzzyArgs, config: &AntiquityConfig) -> Result<()> {
    let _cmd = info_span!("fuzzy").entered();
    let input = convert::parse_date(&args.date)?;
    let extra = convert::extra_fuzziness(&config.fuzzy, args.fuzziness)?;
    let fuzzy = FuzzyDate::build(input, extra)
        .with_context(|| format!("invalid fuzzy date: {:?}", args.date))?;
    info!(
        granularity = ?fuzzy.date().granularity(),
        fuzziness = fuzzy.fuzziness().as_days(),
        "fuzzy date built"
    );

    println!("{fuzzy}");
    println!("  center: {}", convert::describe_calendar(fuzzy.center(), &config.output));
    println!("  start:  {}", convert::describe_calendar(fuzzy.start(), &config.output));
    println!("  end:    {}", convert::describe_calendar(fuzzy.end(), &config.output));
    Ok(())
}
