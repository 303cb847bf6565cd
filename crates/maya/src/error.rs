//! Error types for the baktun-maya crate.

/// Error type for all fallible operations in the baktun-maya crate.
///
/// The only fallible operation is strict Long Count conversion; everything
/// else in this crate is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MayaError {
    /// Returned by strict Long Count conversion when a component is outside
    /// its canonical range. Baktun is unbounded and never reported here.
    #[error("invalid Long Count: {component} is {value} (must be 0..={max})")]
    ComponentOutOfRange {
        /// Name of the offending component.
        component: &'static str,
        /// The out-of-range value that was provided.
        value: i64,
        /// The canonical maximum for the component (19, or 17 for uinal).
        max: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_component_out_of_range() {
        let err = MayaError::ComponentOutOfRange {
            component: "katun",
            value: 20,
            max: 19,
        };
        assert_eq!(
            err.to_string(),
            "invalid Long Count: katun is 20 (must be 0..=19)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MayaError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MayaError>();
    }
}
