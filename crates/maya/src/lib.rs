//! # baktun-maya
//!
//! Pure arithmetic for the Maya calendrical cycles: Long Count (plain and
//! extended), Tzolkʼin, Haabʼ, and the nine Lords of the Night.
//!
//! Every conversion is a pure function of a Julian Day Number and an
//! explicit [`Correlation`], which fixes the JDN of Long Count 0.0.0.0.0
//! (default: the GMT correlation, JDN 584283) and the Haabʼ day numbering
//! base. There is no global state.
//!
//! ## Quick Start
//!
//! ```
//! use baktun_maya::{Correlation, Haab, LongCount, NightLord, Tzolkin};
//!
//! let correlation = Correlation::default();
//! let jdn = 2_456_283; // Gregorian 2012-12-21
//!
//! let lc = LongCount::from_jdn(jdn, &correlation);
//! assert_eq!(lc.to_string(), "13.0.0.0.0");
//! assert_eq!(Tzolkin::from_jdn(jdn, &correlation).to_string(), "4 Ajpuʼ");
//! assert_eq!(Haab::from_jdn(jdn, &correlation).to_string(), "3 Kʼankʼin");
//! assert_eq!(NightLord::from_jdn(jdn, &correlation).to_string(), "G9");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `correlation` | Epoch correlation and Haabʼ day-base configuration |
//! | `long_count` | Long Count tuples, normalization, JDN conversion |
//! | `tzolkin` | 260-day Tzolkʼin cycle (Kʼicheʼ day names) |
//! | `haab` | 365-day Haabʼ cycle (Yucatec month names) |
//! | `night` | 9-day Lords of the Night cycle |
//! | `error` | Error types |

mod correlation;
mod error;
mod haab;
mod long_count;
mod math;
mod night;
mod tzolkin;

pub use correlation::{Correlation, GMT_CORRELATION, HaabDayBase};
pub use error::MayaError;
pub use haab::{HAAB_MONTHS, Haab};
pub use long_count::{
    DAYS_PER_ALAUTUN, DAYS_PER_BAKTUN, DAYS_PER_KALABTUN, DAYS_PER_KATUN, DAYS_PER_KINCHILTUN,
    DAYS_PER_PIKTUN, DAYS_PER_TUN, DAYS_PER_UINAL, ExtendedLongCount, LongCount,
};
pub use night::NightLord;
pub use tzolkin::{TZOLKIN_NAMES, Tzolkin};
