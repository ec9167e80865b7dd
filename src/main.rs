mod cli;
mod config;
mod convert;
mod date_cmd;
mod days_cmd;
mod fuzzy_cmd;
mod logging;
mod sort_cmd;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, DEFAULT_CONFIG};
use crate::config::AntiquityConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // An explicitly named config must exist; the default one may not.
    let required = cli.config != Path::new(DEFAULT_CONFIG);
    let config = AntiquityConfig::load(&cli.config, required)?;

    match cli.command {
        Command::Days(args) => days_cmd::run(args, &config),
        Command::Date(args) => date_cmd::run(args, &config),
        Command::Fuzzy(args) => fuzzy_cmd::run(args, &config),
        Command::Sort(args) => sort_cmd::run(args, &config),
    }
}
