mod cli;
mod commands;
mod config;
mod interactive;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let correlation = config::resolve(&cli)?;
    match cli.command {
        Some(Command::Gregorian(args)) => commands::gregorian(&args, &correlation),
        Some(Command::Lc(args)) => commands::long_count(&args, &correlation),
        Some(Command::Jdn(args)) => commands::jdn(&args, &correlation),
        Some(Command::Today(args)) => commands::today(&args, &correlation),
        None => interactive::run(&correlation),
    }
}
