//! Floor-division helpers shared by the Long Count and cycle modules.

/// Divmod with quotient rounded toward negative infinity and a
/// non-negative remainder.
///
/// Rust's `/` truncates toward zero, which would misplace every component
/// of a pre-epoch date; all cycle and Long Count decompositions go through
/// this helper instead.
pub(crate) fn floor_divmod(a: i64, b: i64) -> (i64, i64) {
    (a.div_euclid(b), a.rem_euclid(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive() {
        assert_eq!(floor_divmod(7, 3), (2, 1));
        assert_eq!(floor_divmod(6, 3), (2, 0));
    }

    #[test]
    fn negative_dividend() {
        assert_eq!(floor_divmod(-1, 20), (-1, 19));
        assert_eq!(floor_divmod(-20, 20), (-1, 0));
        assert_eq!(floor_divmod(-21, 20), (-2, 19));
    }

    #[test]
    fn remainder_always_non_negative() {
        for a in -100..=100 {
            for b in [2i64, 9, 13, 20, 360] {
                let (q, r) = floor_divmod(a, b);
                assert!((0..b).contains(&r), "floor_divmod({a}, {b}) gave r={r}");
                assert_eq!(q * b + r, a);
            }
        }
    }
}
