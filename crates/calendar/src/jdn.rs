//! The Julian Day Number pivot type.

/// Julian Day Number: a signed count of days relative to the JDN epoch.
///
/// Every calendar representation in the workspace is derived from a `Jdn`;
/// no two representations convert to each other directly. 64 bits because
/// the extended Long Count spans tens of billions of days per alautun.
pub type Jdn = i64;
