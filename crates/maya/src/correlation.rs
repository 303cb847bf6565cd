//! Epoch correlation and Haabʼ day-numbering configuration.

use baktun_calendar::Jdn;

/// The Goodman–Martínez–Thompson correlation: JDN of Long Count 0.0.0.0.0.
pub const GMT_CORRELATION: Jdn = 584_283;

/// Haabʼ day numbering convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HaabDayBase {
    /// Days run 0..=19 per month (Wayebʼ 0..=4). The common convention.
    #[default]
    Zero,
    /// Days run 1..=20 per month (Wayebʼ 1..=5).
    One,
}

impl HaabDayBase {
    /// Offset added to the zero-based day for display.
    pub(crate) fn offset(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Configuration shared by every Maya-side conversion: which JDN the Long
/// Count epoch falls on, and how Haabʼ days are numbered.
///
/// Changing the epoch shifts every derived calendar uniformly. Use the
/// builder methods to customise; the default is the GMT correlation with
/// zero-based Haabʼ days.
///
/// # Example
///
/// ```
/// use baktun_maya::{Correlation, GMT_CORRELATION, HaabDayBase};
///
/// let correlation = Correlation::default().with_haab_day_base(HaabDayBase::One);
/// assert_eq!(correlation.epoch(), GMT_CORRELATION);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correlation {
    epoch: Jdn,
    haab_day_base: HaabDayBase,
}

impl Default for Correlation {
    fn default() -> Self {
        Self::new(GMT_CORRELATION)
    }
}

impl Correlation {
    /// Creates a correlation with the given epoch JDN and zero-based
    /// Haabʼ days.
    pub fn new(epoch: Jdn) -> Self {
        Self {
            epoch,
            haab_day_base: HaabDayBase::Zero,
        }
    }

    /// Sets the epoch JDN (the JDN of Long Count 0.0.0.0.0).
    pub fn with_epoch(mut self, epoch: Jdn) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the Haabʼ day numbering base.
    pub fn with_haab_day_base(mut self, base: HaabDayBase) -> Self {
        self.haab_day_base = base;
        self
    }

    /// Returns the epoch JDN.
    pub fn epoch(self) -> Jdn {
        self.epoch
    }

    /// Returns the Haabʼ day numbering base.
    pub fn haab_day_base(self) -> HaabDayBase {
        self.haab_day_base
    }

    /// Signed day count from the Long Count epoch to `jdn`.
    pub(crate) fn days_since_epoch(self, jdn: Jdn) -> i64 {
        jdn - self.epoch
    }
}
