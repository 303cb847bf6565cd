use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Baktun Maya calendar converter.
#[derive(Parser)]
#[command(
    name = "baktun",
    version,
    about = "Convert between Gregorian and Maya calendars (Long Count, Tzolkʼin, Haabʼ, Night Lords)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Correlation constant: the JDN of Long Count 0.0.0.0.0.
    #[arg(long, global = true)]
    pub corr: Option<i64>,

    /// Haabʼ day numbering base: 0 = days 0..19 (Wayebʼ 0..4), 1 = 1..20.
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub haab_day_base: Option<u8>,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; omit it for the interactive prompt.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a proleptic Gregorian date.
    Gregorian(GregorianArgs),
    /// Convert a Long Count date.
    Lc(LcArgs),
    /// Report the calendar round of a raw Julian Day Number.
    Jdn(JdnArgs),
    /// Report today's date.
    Today(TodayArgs),
}

/// Arguments for the `gregorian` subcommand.
#[derive(clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct GregorianArgs {
    /// Year (negative for BCE: -200 is 200 BCE; there is no year 0).
    pub year: i32,

    /// Month (1-12).
    pub month: u8,

    /// Day (1-31).
    pub day: u8,

    /// Show the extended Long Count (Alautun..Kin).
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the `lc` subcommand.
#[derive(clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct LcArgs {
    /// Bʼakʼtun (any integer).
    pub baktun: i64,

    /// Kʼatun (canonically 0-19).
    pub katun: i64,

    /// Tun (canonically 0-19).
    pub tun: i64,

    /// Winal (canonically 0-17).
    pub uinal: i64,

    /// Kin (canonically 0-19).
    pub kin: i64,

    /// Reject out-of-range components instead of normalizing them.
    #[arg(long)]
    pub strict: bool,

    /// Show the extended Long Count (Alautun..Kin).
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the `jdn` subcommand.
#[derive(clap::Args)]
#[command(allow_negative_numbers = true)]
pub struct JdnArgs {
    /// Julian Day Number.
    pub jdn: i64,

    /// Show the extended Long Count (Alautun..Kin).
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Show the extended Long Count (Alautun..Kin).
    #[arg(long)]
    pub extended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_year() {
        let cli = Cli::parse_from(["baktun", "gregorian", "-200", "3", "1"]);
        match cli.command {
            Some(Command::Gregorian(args)) => {
                assert_eq!((args.year, args.month, args.day), (-200, 3, 1));
                assert!(!args.extended);
            }
            _ => panic!("expected gregorian subcommand"),
        }
    }

    #[test]
    fn parses_lc_with_strict() {
        let cli = Cli::parse_from(["baktun", "lc", "0", "20", "0", "0", "0", "--strict"]);
        match cli.command {
            Some(Command::Lc(args)) => {
                assert_eq!(args.katun, 20);
                assert!(args.strict);
            }
            _ => panic!("expected lc subcommand"),
        }
    }

    #[test]
    fn global_flags() {
        let cli = Cli::parse_from([
            "baktun",
            "--corr",
            "584285",
            "--haab-day-base",
            "1",
            "-vv",
            "today",
        ]);
        assert_eq!(cli.corr, Some(584_285));
        assert_eq!(cli.haab_day_base, Some(1));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_haab_day_base_2() {
        assert!(Cli::try_parse_from(["baktun", "--haab-day-base", "2", "today"]).is_err());
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::parse_from(["baktun"]);
        assert!(cli.command.is_none());
    }
}
