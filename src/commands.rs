//! One-shot subcommand runners.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info;

use baktun_calendar::{GregorianDate, Jdn};
use baktun_maya::{Correlation, LongCount};

use crate::cli::{GregorianArgs, JdnArgs, LcArgs, TodayArgs};
use crate::report;

/// Convert a Gregorian date given on the command line.
pub fn gregorian(args: &GregorianArgs, correlation: &Correlation) -> Result<()> {
    let date = GregorianDate::new(args.year, args.month, args.day)
        .context("invalid Gregorian date")?;
    let jdn = date.to_jdn();
    info!(%date, jdn, "converted Gregorian date");
    print_report(jdn, correlation, args.extended);
    Ok(())
}

/// Convert a Long Count given on the command line, strict or normalizing.
pub fn long_count(args: &LcArgs, correlation: &Correlation) -> Result<()> {
    let lc = LongCount::new(args.baktun, args.katun, args.tun, args.uinal, args.kin);
    let jdn = if args.strict {
        lc.to_jdn_strict(correlation)?
    } else {
        lc.to_jdn(correlation)
    };
    info!(%lc, jdn, strict = args.strict, "converted Long Count");
    print_report(jdn, correlation, args.extended);
    Ok(())
}

/// Report the calendar round of a raw JDN.
pub fn jdn(args: &JdnArgs, correlation: &Correlation) -> Result<()> {
    print_report(args.jdn, correlation, args.extended);
    Ok(())
}

/// Report today's date from the system clock.
pub fn today(args: &TodayArgs, correlation: &Correlation) -> Result<()> {
    let jdn = today_jdn()?;
    info!(jdn, "resolved today's date");
    print_report(jdn, correlation, args.extended);
    Ok(())
}

/// JDN of the current local date.
pub fn today_jdn() -> Result<Jdn> {
    let now = chrono::Local::now().date_naive();
    let date = GregorianDate::new(now.year(), now.month() as u8, now.day() as u8)
        .context("system clock returned an invalid date")?;
    Ok(date.to_jdn())
}

fn print_report(jdn: Jdn, correlation: &Correlation, extended: bool) {
    if extended {
        print!("{}", report::extended(jdn, correlation));
    } else {
        print!("{}", report::standard(jdn, correlation));
    }
}
