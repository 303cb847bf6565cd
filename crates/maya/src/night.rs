//! The nine Lords of the Night.

use std::fmt;

use baktun_calendar::Jdn;

use crate::correlation::Correlation;
use crate::math::floor_divmod;

// Long Count 0.0.0.0.0 falls on G9.
const EPOCH_LORD: i64 = 9;

/// One of the nine Lords of the Night, conventionally labelled G1..G9.
/// The cycle repeats every 9 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NightLord(u8);

impl NightLord {
    /// Computes the Lord of the Night for `jdn` under `correlation`.
    /// Pure and total; periodic with period 9.
    pub fn from_jdn(jdn: Jdn, correlation: &Correlation) -> Self {
        let days = correlation.days_since_epoch(jdn);
        let (_, n) = floor_divmod(EPOCH_LORD - 1 + days, 9);
        Self((n + 1) as u8)
    }

    /// Returns the lord's number (1..=9).
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for NightLord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gmt() -> Correlation {
        Correlation::default()
    }

    #[test]
    fn epoch_is_g9() {
        let lord = NightLord::from_jdn(584_283, &gmt());
        assert_eq!(lord.number(), 9);
        assert_eq!(lord.to_string(), "G9");
    }

    #[test]
    fn baktun_13_completion_is_g9() {
        // 1 872 000 days is a whole number of 9-day cycles.
        assert_eq!(NightLord::from_jdn(2_456_283, &gmt()).to_string(), "G9");
    }

    #[test]
    fn known_2024_new_year() {
        assert_eq!(NightLord::from_jdn(2_460_311, &gmt()).to_string(), "G5");
    }

    #[test]
    fn wraps_after_g9() {
        assert_eq!(NightLord::from_jdn(584_284, &gmt()).number(), 1);
        assert_eq!(NightLord::from_jdn(584_282, &gmt()).number(), 8);
    }

    #[test]
    fn periodic_9() {
        for jdn in [-50i64, 0, 584_283, 2_460_311] {
            assert_eq!(
                NightLord::from_jdn(jdn, &gmt()),
                NightLord::from_jdn(jdn + 9, &gmt()),
                "period broken at jdn {jdn}"
            );
        }
    }
}
