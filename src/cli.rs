use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Antiquity historical date converter.
#[derive(Parser)]
#[command(
    name = "antiquity",
    version,
    about = "Convert between Julian Day counts, Gregorian dates and fuzzy historical dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Config path used when `--config` is not given. A missing file at this
/// path is not an error.
pub const DEFAULT_CONFIG: &str = "antiquity.toml";

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Julian Date to a Gregorian calendar date.
    Days(DaysArgs),
    /// Convert a Gregorian calendar date to a Julian Date.
    Date(DateArgs),
    /// Describe a partial or uncertain date.
    Fuzzy(FuzzyArgs),
    /// Sort dates chronologically.
    Sort(SortArgs),
}

/// Arguments for the `days` subcommand.
#[derive(clap::Args)]
pub struct DaysArgs {
    /// Day count to convert.
    #[arg(allow_hyphen_values = true)]
    pub days: f64,

    /// Interpret the value as a Modified Julian Day.
    #[arg(long)]
    pub mjd: bool,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Calendar year; negative for BCE (-1 is 1 BCE).
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Month (1-12).
    pub month: u8,

    /// Day of the month.
    pub day: u8,

    /// Hour (0-23).
    #[arg(long, default_value_t = 0)]
    pub hour: u8,

    /// Minute (0-59).
    #[arg(long, default_value_t = 0)]
    pub minute: u8,

    /// Second (0-59).
    #[arg(long, default_value_t = 0)]
    pub second: u8,
}

/// Arguments for the `fuzzy` subcommand.
#[derive(clap::Args)]
pub struct FuzzyArgs {
    /// Date as YEAR, YEAR-MM or YEAR-MM-DD[.fraction]; prefix '-' or suffix
    /// ' BCE' for years before the common era.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Extra uncertainty in days, added to the implied radius.
    #[arg(short, long)]
    pub fuzziness: Option<f64>,
}

/// Arguments for the `sort` subcommand.
#[derive(clap::Args)]
pub struct SortArgs {
    /// Dates in the same format accepted by `fuzzy`.
    #[arg(required = true, allow_hyphen_values = true)]
    pub dates: Vec<String>,
}
