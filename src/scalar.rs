use strum_macros::Display;

/// Which bounds [`is_within_range`] excludes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum RangeComparison {
    /// Both bounds count as within the range.
    #[default]
    None,
    /// Neither bound counts as within the range.
    ExcludeBoth,
    /// The lower bound does not count as within the range.
    ExcludeLower,
    /// The upper bound does not count as within the range.
    ExcludeUpper,
}

/// Returns true iff `value` equals one of `candidates`.
///
/// An absent candidate list yields false, not an error.
pub fn is_member<T: PartialEq>(value: &T, candidates: Option<&[T]>) -> bool {
    candidates.is_some_and(|candidates| candidates.contains(value))
}

/// Returns true iff `value` lies between `lower` and `upper`.
///
/// Bound inclusion is controlled by `comparison`; the default
/// [`RangeComparison::None`] includes both bounds. The bounds are not
/// validated: an inverted range (`lower > upper`) simply yields false.
pub fn is_within_range<T: PartialOrd>(
    value: &T,
    lower: &T,
    upper: &T,
    comparison: RangeComparison,
) -> bool {
    match comparison {
        RangeComparison::None => lower <= value && value <= upper,
        RangeComparison::ExcludeBoth => lower < value && value < upper,
        RangeComparison::ExcludeLower => lower < value && value <= upper,
        RangeComparison::ExcludeUpper => lower <= value && value < upper,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_is_member() {
        let candidates = vec![1, 2, 3];
        assert!(is_member(&2, Some(candidates.as_slice())));
        assert!(!is_member(&4, Some(candidates.as_slice())));
    }

    #[test]
    fn test_is_member_absent_candidates() {
        assert!(!is_member(&1, None));
    }

    #[test]
    fn test_is_member_strings() {
        let candidates = vec!["Magic", "Bean"];
        assert!(is_member(&"Bean", Some(candidates.as_slice())));
        assert!(!is_member(&"Stalk", Some(candidates.as_slice())));
    }

    #[test]
    fn test_within_range_interior_value() {
        assert!(is_within_range(&2, &1, &3, RangeComparison::None));
        assert!(is_within_range(&2, &1, &3, RangeComparison::ExcludeBoth));
        assert!(is_within_range(&2, &1, &3, RangeComparison::ExcludeLower));
        assert!(is_within_range(&2, &1, &3, RangeComparison::ExcludeUpper));
    }

    #[test]
    fn test_within_range_lower_bound_inclusion() {
        assert!(is_within_range(&1, &1, &3, RangeComparison::None));
        assert!(is_within_range(&1, &1, &3, RangeComparison::ExcludeUpper));
        assert!(!is_within_range(&1, &1, &3, RangeComparison::ExcludeBoth));
        assert!(!is_within_range(&1, &1, &3, RangeComparison::ExcludeLower));
    }

    #[test]
    fn test_within_range_upper_bound_inclusion() {
        assert!(is_within_range(&3, &1, &3, RangeComparison::None));
        assert!(is_within_range(&3, &1, &3, RangeComparison::ExcludeLower));
        assert!(!is_within_range(&3, &1, &3, RangeComparison::ExcludeBoth));
        assert!(!is_within_range(&3, &1, &3, RangeComparison::ExcludeUpper));
    }

    #[test]
    fn test_within_range_outside_value() {
        assert!(!is_within_range(&0, &1, &3, RangeComparison::None));
        assert!(!is_within_range(&4, &1, &3, RangeComparison::None));
    }

    #[test]
    fn test_within_range_inverted_range_is_always_false() {
        assert!(!is_within_range(&2, &3, &1, RangeComparison::None));
        assert!(!is_within_range(&2, &3, &1, RangeComparison::ExcludeBoth));
        assert!(!is_within_range(&2, &3, &1, RangeComparison::ExcludeLower));
        assert!(!is_within_range(&2, &3, &1, RangeComparison::ExcludeUpper));
    }

    #[test]
    fn test_within_range_decimals() {
        assert!(is_within_range(
            &dec!(1.5),
            &dec!(1),
            &dec!(2),
            RangeComparison::ExcludeBoth
        ));
    }
}
