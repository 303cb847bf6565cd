//! Interactive prompt loop: the fallback mode when no subcommand is given.
//!
//! All parsing failures are recovered by re-prompting; EOF on stdin exits
//! cleanly from any prompt.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use baktun_calendar::{GregorianDate, Jdn};
use baktun_maya::{Correlation, LongCount};

use crate::commands::today_jdn;
use crate::report;

/// Run the interactive session until the user quits or stdin closes.
pub fn run(correlation: &Correlation) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let today = today_jdn()?;
    println!(
        "[Using correlation JDN = {}, Haabʼ day base = {:?}]",
        correlation.epoch(),
        correlation.haab_day_base()
    );
    println!("\nWelcome! Today is:\n");
    print!("{}", report::standard(today, correlation));
    let mut last_jdn = today;

    loop {
        let Some(mode) = prompt(
            &mut input,
            "\nConvert from [g]regorian or [l]ong count, show last in [e]xtended format, or [q]uit: ",
        )?
        else {
            break;
        };
        match mode.to_lowercase().as_str() {
            m if m.starts_with('g') => {
                let Some(jdn) = read_gregorian(&mut input)? else {
                    break;
                };
                last_jdn = jdn;
                print!("\n{}", report::standard(jdn, correlation));
            }
            m if m.starts_with('l') => {
                let Some(jdn) = read_long_count(&mut input, correlation)? else {
                    break;
                };
                last_jdn = jdn;
                print!("\n{}", report::standard(jdn, correlation));
            }
            m if m.starts_with('e') => {
                print!("\n{}", report::extended(last_jdn, correlation));
            }
            m if m.starts_with('q') => break,
            "" => {}
            _ => println!("Please choose 'g', 'l', 'e', or 'q'."),
        }
    }
    Ok(())
}

/// Reads a Gregorian date, re-prompting until it is valid. `None` on EOF.
fn read_gregorian<R: BufRead>(input: &mut R) -> Result<Option<Jdn>> {
    loop {
        let Some(year) = prompt_parse::<R, i32>(input, "Year (negative for BCE, no year 0): ")?
        else {
            return Ok(None);
        };
        let Some(month) = prompt_parse::<R, u8>(input, "Month (1-12): ")? else {
            return Ok(None);
        };
        let Some(day) = prompt_parse::<R, u8>(input, "Day: ")? else {
            return Ok(None);
        };
        match GregorianDate::new(year, month, day) {
            Ok(date) => {
                let jdn = date.to_jdn();
                debug!(%date, jdn, "interactive Gregorian conversion");
                return Ok(Some(jdn));
            }
            Err(e) => println!("{e}. Please enter a valid Gregorian date."),
        }
    }
}

/// Reads five Long Count components; any integers are accepted and
/// normalized. `None` on EOF.
fn read_long_count<R: BufRead>(input: &mut R, correlation: &Correlation) -> Result<Option<Jdn>> {
    let labels = [
        "Bʼakʼtun (any integer): ",
        "Kʼatun (any integer; normalized): ",
        "Tun (any integer; normalized): ",
        "Winal (any integer; normalized): ",
        "Kin (any integer; normalized): ",
    ];
    let mut components = [0i64; 5];
    for (slot, label) in components.iter_mut().zip(labels) {
        let Some(value) = prompt_parse::<R, i64>(input, label)? else {
            return Ok(None);
        };
        *slot = value;
    }
    let [baktun, katun, tun, uinal, kin] = components;
    let lc = LongCount::new(baktun, katun, tun, uinal, kin);
    let jdn = lc.to_jdn(correlation);
    debug!(%lc, jdn, "interactive Long Count conversion");
    Ok(Some(jdn))
}

/// Prints `msg` and reads one trimmed line. `None` on EOF.
fn prompt<R: BufRead>(input: &mut R, msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until the line parses as `T`. `None` on EOF.
fn prompt_parse<R: BufRead, T: FromStr>(input: &mut R, msg: &str) -> Result<Option<T>> {
    loop {
        let Some(line) = prompt(input, msg)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
