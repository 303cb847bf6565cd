//! # baktun-calendar
//!
//! Proleptic Gregorian date arithmetic over a Julian Day Number pivot.
//!
//! Years use historical numbering: there is no year 0, so year -1 is
//! 1 BCE. Internally the JDN formulas work on astronomical numbering
//! (where 1 BCE is year 0); the shift happens at the boundary.
//!
//! ## Quick Start
//!
//! ```
//! use baktun_calendar::GregorianDate;
//!
//! let date = GregorianDate::new(2024, 1, 1).unwrap();
//! let jdn = date.to_jdn();
//! assert_eq!(jdn, 2_460_311);
//! assert_eq!(GregorianDate::from_jdn(jdn), date);
//!
//! // 200 BCE
//! let bce = GregorianDate::new(-200, 3, 1).unwrap();
//! assert_eq!(GregorianDate::from_jdn(bce.to_jdn()), bce);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | The `Jdn` day-count type |
//! | `gregorian` | Validated Gregorian date, leap rule, JDN conversion |
//! | `error` | Error types |

mod error;
mod gregorian;
mod jdn;

pub use error::CalendarError;
pub use gregorian::{GregorianDate, days_in_month, is_leap_year};
pub use jdn::Jdn;
