//! Pure report rendering: a JDN plus a correlation in, formatted text out.

use std::fmt::Write;

use baktun_calendar::{GregorianDate, Jdn};
use baktun_maya::{Correlation, ExtendedLongCount, Haab, LongCount, NightLord, Tzolkin};

/// The single-line diary format:
/// `LC - N Name - D Month - Gx - YYYY-MM-DD`.
pub fn diary_line(jdn: Jdn, correlation: &Correlation) -> String {
    format!(
        "{} - {} - {} - {} - {}",
        LongCount::from_jdn(jdn, correlation),
        Tzolkin::from_jdn(jdn, correlation),
        Haab::from_jdn(jdn, correlation),
        NightLord::from_jdn(jdn, correlation),
        GregorianDate::from_jdn(jdn),
    )
}

/// Diary line with the 9-component extended Long Count in front.
pub fn extended_diary_line(jdn: Jdn, correlation: &Correlation) -> String {
    format!(
        "{} - {} - {} - {} - {}",
        ExtendedLongCount::from_jdn(jdn, correlation),
        Tzolkin::from_jdn(jdn, correlation),
        Haab::from_jdn(jdn, correlation),
        NightLord::from_jdn(jdn, correlation),
        GregorianDate::from_jdn(jdn),
    )
}

/// Full labelled report for one day.
pub fn standard(jdn: Jdn, correlation: &Correlation) -> String {
    let lc = LongCount::from_jdn(jdn, correlation);
    let mut out = String::new();
    let _ = writeln!(out, "Diary Format:\n{}", diary_line(jdn, correlation));
    let _ = writeln!(out);
    let _ = writeln!(out, "Long Count:");
    let _ = writeln!(
        out,
        "{} Bʼakʼtun, {} Kʼatun, {} Tun, {} Winal, {} Kin",
        lc.baktun(),
        lc.katun(),
        lc.tun(),
        lc.uinal(),
        lc.kin()
    );
    push_cycles(&mut out, jdn, correlation);
    out
}

/// Full labelled report with the extended Long Count breakdown.
pub fn extended(jdn: Jdn, correlation: &Correlation) -> String {
    let ext = ExtendedLongCount::from_jdn(jdn, correlation);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Diary Format (Extended):\n{}",
        extended_diary_line(jdn, correlation)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Extended Long Count:");
    let _ = writeln!(
        out,
        "{} Alautun, {} Kʼinchiltun, {} Kalabtun, {} Piktun, {} Bʼakʼtun, {} Kʼatun, {} Tun, {} Winal, {} Kin",
        ext.alautun(),
        ext.kinchiltun(),
        ext.kalabtun(),
        ext.piktun(),
        ext.baktun(),
        ext.katun(),
        ext.tun(),
        ext.uinal(),
        ext.kin()
    );
    push_cycles(&mut out, jdn, correlation);
    out
}

fn push_cycles(out: &mut String, jdn: Jdn, correlation: &Correlation) {
    let _ = writeln!(
        out,
        "Cholqʼij (Tzolkʼin) (Kʼicheʼ name): {}",
        Tzolkin::from_jdn(jdn, correlation)
    );
    let _ = writeln!(
        out,
        "Haabʼ (Yucatec name): {}",
        Haab::from_jdn(jdn, correlation)
    );
    let _ = writeln!(
        out,
        "Lord of the Night: {}",
        NightLord::from_jdn(jdn, correlation)
    );
    let _ = writeln!(
        out,
        "Gregorian (proleptic): {}",
        GregorianDate::from_jdn(jdn)
    );
}
