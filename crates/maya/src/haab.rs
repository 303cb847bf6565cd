//! The 365-day Haabʼ cycle.

use std::fmt;

use baktun_calendar::Jdn;

use crate::correlation::Correlation;
use crate::math::floor_divmod;

/// The 19 Haabʼ months, Yucatec spelling: 18 months of 20 days followed by
/// the five unlucky days of Wayebʼ.
pub const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Wo", "Sip", "Sotzʼ", "Sek", "Xul", "Yaxkʼin", "Mol", "Chʼen", "Yax", "Sak", "Keh",
    "Mak", "Kʼankʼin", "Muwan", "Pax", "Kʼayab", "Kumkʼu", "Wayebʼ",
];

// Long Count 0.0.0.0.0 falls on 8 Kumkʼu: absolute index 17 * 20 + 8.
const EPOCH_HAAB_INDEX: i64 = 348;

/// A Haabʼ date: a month name and a day number within it.
///
/// The stored day already honours the configured numbering base, so it is
/// 0..=19 (Wayebʼ 0..=4) under [`HaabDayBase::Zero`] and 1..=20 under
/// [`HaabDayBase::One`].
///
/// [`HaabDayBase::Zero`]: crate::HaabDayBase::Zero
/// [`HaabDayBase::One`]: crate::HaabDayBase::One
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Haab {
    month_index: u8,
    day: u8,
}

impl Haab {
    /// Computes the Haabʼ date of `jdn` under `correlation`.
    /// Pure and total; periodic with period 365.
    pub fn from_jdn(jdn: Jdn, correlation: &Correlation) -> Self {
        let days = correlation.days_since_epoch(jdn);
        let (_, index) = floor_divmod(EPOCH_HAAB_INDEX + days, 365);
        let month_index = (index / 20) as u8;
        let day = (index % 20) as u8 + correlation.haab_day_base().offset();
        Self { month_index, day }
    }

    /// Returns the month name (Yucatec spelling).
    pub fn month(self) -> &'static str {
        HAAB_MONTHS[self.month_index as usize]
    }

    /// Returns the day number under the configured base.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Whether this date falls in the five-day Wayebʼ month.
    pub fn is_wayeb(self) -> bool {
        self.month_index == 18
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month())
    }
}
