//! Long Count tuples, normalization, and JDN conversion.

use std::fmt;

use baktun_calendar::Jdn;

use crate::correlation::Correlation;
use crate::error::MayaError;
use crate::math::floor_divmod;

/// Days per uinal (20 kin).
pub const DAYS_PER_UINAL: i64 = 20;
/// Days per tun (18 uinal).
pub const DAYS_PER_TUN: i64 = 360;
/// Days per katun (20 tun).
pub const DAYS_PER_KATUN: i64 = 7_200;
/// Days per baktun (20 katun).
pub const DAYS_PER_BAKTUN: i64 = 144_000;
/// Days per piktun (20 baktun).
pub const DAYS_PER_PIKTUN: i64 = 20 * DAYS_PER_BAKTUN;
/// Days per kalabtun (20 piktun).
pub const DAYS_PER_KALABTUN: i64 = 20 * DAYS_PER_PIKTUN;
/// Days per kinchiltun (20 kalabtun).
pub const DAYS_PER_KINCHILTUN: i64 = 20 * DAYS_PER_KALABTUN;
/// Days per alautun (20 kinchiltun, 23 040 000 000 days).
pub const DAYS_PER_ALAUTUN: i64 = 20 * DAYS_PER_KINCHILTUN;

/// A Long Count date: days since the correlation epoch decomposed into
/// baktun, katun, tun, uinal, and kin.
///
/// Canonical form has katun, tun, and kin in 0..=19 and uinal in 0..=17;
/// baktun is unbounded and signed (pre-epoch dates have a negative
/// baktun). Out-of-range components are representable on purpose: they
/// arise from user input and are folded into canonical form by
/// [`LongCount::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LongCount {
    baktun: i64,
    katun: i64,
    tun: i64,
    uinal: i64,
    kin: i64,
}

impl LongCount {
    /// Creates a Long Count from raw components. No range check: any
    /// integers are accepted and represent `total_days()` days from the
    /// epoch.
    pub fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Decomposes a signed day count into canonical components.
    fn from_days(days: i64) -> Self {
        let (baktun, rem) = floor_divmod(days, DAYS_PER_BAKTUN);
        let (katun, rem) = floor_divmod(rem, DAYS_PER_KATUN);
        let (tun, rem) = floor_divmod(rem, DAYS_PER_TUN);
        let (uinal, kin) = floor_divmod(rem, DAYS_PER_UINAL);
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Converts a JDN to its canonical Long Count under `correlation`.
    ///
    /// Floor division keeps every component in range for pre-epoch dates:
    /// the day before 0.0.0.0.0 is -1.19.19.17.19.
    pub fn from_jdn(jdn: Jdn, correlation: &Correlation) -> Self {
        Self::from_days(correlation.days_since_epoch(jdn))
    }

    /// Returns the baktun component.
    pub fn baktun(self) -> i64 {
        self.baktun
    }

    /// Returns the katun component.
    pub fn katun(self) -> i64 {
        self.katun
    }

    /// Returns the tun component.
    pub fn tun(self) -> i64 {
        self.tun
    }

    /// Returns the uinal component.
    pub fn uinal(self) -> i64 {
        self.uinal
    }

    /// Returns the kin component.
    pub fn kin(self) -> i64 {
        self.kin
    }

    /// Total day count from the epoch: the plain linear combination.
    /// Defined for out-of-range components and may be negative.
    pub fn total_days(self) -> i64 {
        self.baktun * DAYS_PER_BAKTUN
            + self.katun * DAYS_PER_KATUN
            + self.tun * DAYS_PER_TUN
            + self.uinal * DAYS_PER_UINAL
            + self.kin
    }

    /// Whether every component is within its canonical range.
    pub fn is_canonical(self) -> bool {
        (0..=19).contains(&self.katun)
            && (0..=19).contains(&self.tun)
            && (0..=17).contains(&self.uinal)
            && (0..=19).contains(&self.kin)
    }

    /// Folds out-of-range components into canonical form, preserving the
    /// total day count. Idempotent; two spellings of the same day count
    /// normalize to the same value.
    pub fn normalize(self) -> Self {
        Self::from_days(self.total_days())
    }

    /// Converts to a JDN, normalizing out-of-range components first.
    /// Never fails.
    pub fn to_jdn(self, correlation: &Correlation) -> Jdn {
        correlation.epoch() + self.normalize().total_days()
    }

    /// Converts to a JDN, rejecting out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`MayaError::ComponentOutOfRange`] naming the first
    /// offending component when katun, tun, or kin is outside 0..=19 or
    /// uinal is outside 0..=17. Baktun is unconstrained.
    pub fn to_jdn_strict(self, correlation: &Correlation) -> Result<Jdn, MayaError> {
        for (component, value, max) in [
            ("katun", self.katun, 19),
            ("tun", self.tun, 19),
            ("uinal", self.uinal, 17),
            ("kin", self.kin, 19),
        ] {
            if !(0..=max).contains(&value) {
                return Err(MayaError::ComponentOutOfRange {
                    component,
                    value,
                    max,
                });
            }
        }
        Ok(correlation.epoch() + self.total_days())
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

/// An extended Long Count: the five classic components prefixed with the
/// four higher-order units (alautun, kinchiltun, kalabtun, piktun, each
/// 20x the next-lower unit), so baktun is also confined to 0..=19.
///
/// Always canonical; built only from a JDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtendedLongCount {
    alautun: i64,
    kinchiltun: i64,
    kalabtun: i64,
    piktun: i64,
    baktun: i64,
    katun: i64,
    tun: i64,
    uinal: i64,
    kin: i64,
}

impl ExtendedLongCount {
    /// Converts a JDN to its canonical extended Long Count under
    /// `correlation`.
    pub fn from_jdn(jdn: Jdn, correlation: &Correlation) -> Self {
        let days = correlation.days_since_epoch(jdn);
        let (alautun, rem) = floor_divmod(days, DAYS_PER_ALAUTUN);
        let (kinchiltun, rem) = floor_divmod(rem, DAYS_PER_KINCHILTUN);
        let (kalabtun, rem) = floor_divmod(rem, DAYS_PER_KALABTUN);
        let (piktun, rem) = floor_divmod(rem, DAYS_PER_PIKTUN);
        let (baktun, rem) = floor_divmod(rem, DAYS_PER_BAKTUN);
        let (katun, rem) = floor_divmod(rem, DAYS_PER_KATUN);
        let (tun, rem) = floor_divmod(rem, DAYS_PER_TUN);
        let (uinal, kin) = floor_divmod(rem, DAYS_PER_UINAL);
        Self {
            alautun,
            kinchiltun,
            kalabtun,
            piktun,
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Returns the alautun component (unbounded, signed).
    pub fn alautun(self) -> i64 {
        self.alautun
    }

    /// Returns the kinchiltun component.
    pub fn kinchiltun(self) -> i64 {
        self.kinchiltun
    }

    /// Returns the kalabtun component.
    pub fn kalabtun(self) -> i64 {
        self.kalabtun
    }

    /// Returns the piktun component.
    pub fn piktun(self) -> i64 {
        self.piktun
    }

    /// Returns the baktun component.
    pub fn baktun(self) -> i64 {
        self.baktun
    }

    /// Returns the katun component.
    pub fn katun(self) -> i64 {
        self.katun
    }

    /// Returns the tun component.
    pub fn tun(self) -> i64 {
        self.tun
    }

    /// Returns the uinal component.
    pub fn uinal(self) -> i64 {
        self.uinal
    }

    /// Returns the kin component.
    pub fn kin(self) -> i64 {
        self.kin
    }

    /// Components as a 9-element array, highest unit first.
    pub fn components(self) -> [i64; 9] {
        [
            self.alautun,
            self.kinchiltun,
            self.kalabtun,
            self.piktun,
            self.baktun,
            self.katun,
            self.tun,
            self.uinal,
            self.kin,
        ]
    }

    /// Total day count from the epoch.
    pub fn total_days(self) -> i64 {
        self.alautun * DAYS_PER_ALAUTUN
            + self.kinchiltun * DAYS_PER_KINCHILTUN
            + self.kalabtun * DAYS_PER_KALABTUN
            + self.piktun * DAYS_PER_PIKTUN
            + self.baktun * DAYS_PER_BAKTUN
            + self.katun * DAYS_PER_KATUN
            + self.tun * DAYS_PER_TUN
            + self.uinal * DAYS_PER_UINAL
            + self.kin
    }
}

impl fmt::Display for ExtendedLongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}.{}.{}.{}.{}",
            self.alautun,
            self.kinchiltun,
            self.kalabtun,
            self.piktun,
            self.baktun,
            self.katun,
            self.tun,
            self.uinal,
            self.kin
        )
    }
}
