//! Validated proleptic Gregorian date and JDN conversion.

use std::fmt;

use crate::error::CalendarError;
use crate::jdn::Jdn;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December). February is corrected
/// by the leap rule in [`days_in_month`].
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns whether `year` (historical numbering) is a Gregorian leap year.
///
/// The rule is applied to the astronomical year, so non-positive historical
/// years are shifted by +1 first: year -1 (1 BCE) is astronomical year 0
/// and therefore a leap year.
pub fn is_leap_year(year: i32) -> bool {
    let y = if year > 0 { year } else { year + 1 };
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Returns the number of days in `month` of `year` under the proleptic
/// Gregorian leap rule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// A validated date in the proleptic Gregorian calendar.
///
/// Historical year numbering: year -1 is 1 BCE, year 1 is 1 CE, and
/// year 0 does not exist. Construction validates, so every value of this
/// type converts to a `Jdn` and back losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `year` is 0, `month` is outside 1..=12,
    /// or `day` is outside the month's length for that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0 {
            return Err(CalendarError::InvalidYearZero);
        }
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (historical numbering, never 0).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Converts this date to its Julian Day Number.
    ///
    /// Uses the standard integer formula on astronomical year numbering;
    /// divisions must floor (not truncate) so that deep-BCE years land on
    /// the right day, hence `div_euclid` throughout.
    pub fn to_jdn(self) -> Jdn {
        let year = i64::from(self.year);
        let year = if year < 0 { year + 1 } else { year };
        let month = i64::from(self.month);
        let a = (14 - month).div_euclid(12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        i64::from(self.day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045
    }

    /// Converts a Julian Day Number back to a Gregorian date.
    ///
    /// Total over all `Jdn` values. The output year is historical
    /// (astronomical years <= 0 shift down by one to skip year 0), so this
    /// is the exact inverse of [`GregorianDate::to_jdn`].
    pub fn from_jdn(jdn: Jdn) -> Self {
        let f = jdn + 1401 + ((4 * jdn + 274277).div_euclid(146097) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        let g = e.rem_euclid(1461) / 4;
        let h = 5 * g + 2;
        let day = h.rem_euclid(153) / 5 + 1;
        let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
        let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
        let year = if year <= 0 { year - 1 } else { year };
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn leap_years_bce() {
        // 1 BCE is astronomical year 0, divisible by 400.
        assert!(is_leap_year(-1));
        // 5 BCE is astronomical year -4.
        assert!(is_leap_year(-5));
        // 101 BCE is astronomical year -100: century, not quadricentury.
        assert!(!is_leap_year(-101));
        assert!(!is_leap_year(-2));
    }

    #[test]
    fn days_in_month_february() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(-1, 2).unwrap(), 29);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_valid() {
        let date = GregorianDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn new_rejects_year_zero() {
        assert_eq!(
            GregorianDate::new(0, 1, 1).unwrap_err(),
            CalendarError::InvalidYearZero
        );
    }

    #[test]
    fn new_rejects_feb_29_common_year() {
        assert_eq!(
            GregorianDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_rejects_day_zero() {
        assert!(matches!(
            GregorianDate::new(2024, 6, 0).unwrap_err(),
            CalendarError::InvalidDay { day: 0, .. }
        ));
    }

    #[test]
    fn known_jdns() {
        let cases: &[(i32, u8, u8, Jdn)] = &[
            (2024, 1, 1, 2_460_311),
            (2012, 12, 21, 2_456_283),
            (2000, 1, 1, 2_451_545),
            (1970, 1, 1, 2_440_588),
            (-3114, 8, 11, 584_283),  // Long Count epoch under GMT correlation
            (-4714, 11, 24, 0),       // JDN epoch itself
        ];
        for &(y, m, d, jdn) in cases {
            let date = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(date.to_jdn(), jdn, "to_jdn({y}-{m}-{d})");
            assert_eq!(GregorianDate::from_jdn(jdn), date, "from_jdn({jdn})");
        }
    }

    #[test]
    fn year_boundary_skips_zero() {
        let last_bce = GregorianDate::new(-1, 12, 31).unwrap();
        let first_ce = GregorianDate::new(1, 1, 1).unwrap();
        assert_eq!(first_ce.to_jdn(), last_bce.to_jdn() + 1);
        assert_eq!(GregorianDate::from_jdn(last_bce.to_jdn()), last_bce);
    }

    #[test]
    fn ordering_across_eras() {
        let bce = GregorianDate::new(-200, 6, 15).unwrap();
        let ce = GregorianDate::new(200, 6, 15).unwrap();
        assert!(bce < ce);
        assert!(GregorianDate::new(-200, 6, 15).unwrap() < GregorianDate::new(-200, 6, 16).unwrap());
    }

    #[test]
    fn display_format() {
        let date = GregorianDate::new(2024, 1, 1).unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
        let bce = GregorianDate::new(-200, 3, 5).unwrap();
        assert_eq!(bce.to_string(), "-200-03-05");
    }
}
