//! The 260-day Tzolkʼin cycle.

use std::fmt;

use baktun_calendar::Jdn;

use crate::correlation::Correlation;
use crate::math::floor_divmod;

/// The 20 Tzolkʼin day names, Kʼicheʼ spelling, in cycle order.
pub const TZOLKIN_NAMES: [&str; 20] = [
    "Imox", "Iqʼ", "Aqʼabʼal", "Kʼat", "Kan", "Kame", "Kej", "Qʼanil", "Toj", "Tzʼiʼ", "Bʼatzʼ",
    "E", "Aj", "Iʼx", "Tzʼikin", "Ajmaq", "Noʼj", "Tijax", "Kawoq", "Ajpuʼ",
];

// Long Count 0.0.0.0.0 falls on 4 Ajpuʼ.
const EPOCH_NAME_INDEX: i64 = 19;
const EPOCH_NUMBER: i64 = 4;

/// A Tzolkʼin date: a number 1..=13 paired with one of the 20 day names.
/// The combined cycle repeats every 260 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tzolkin {
    number: u8,
    name_index: u8,
}

impl Tzolkin {
    /// Computes the Tzolkʼin date of `jdn` under `correlation`.
    /// Pure and total; periodic with period 260.
    pub fn from_jdn(jdn: Jdn, correlation: &Correlation) -> Self {
        let days = correlation.days_since_epoch(jdn);
        let (_, name_index) = floor_divmod(EPOCH_NAME_INDEX + days, 20);
        let (_, number) = floor_divmod(EPOCH_NUMBER - 1 + days, 13);
        Self {
            number: (number + 1) as u8,
            name_index: name_index as u8,
        }
    }

    /// Returns the day number (1..=13).
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the day name (Kʼicheʼ spelling).
    pub fn name(self) -> &'static str {
        TZOLKIN_NAMES[self.name_index as usize]
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name())
    }
}
