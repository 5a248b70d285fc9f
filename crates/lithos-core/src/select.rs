//! Generic candidate selection.
//!
//! Device and display negotiation share the same shape: a list of enumerated
//! descriptors is matched against a requirement value, keeping the
//! candidates that satisfy it. The requirement types implement [`Criteria`]
//! and [`filter`] does the walk.

/// A requirement that candidates of type `T` either satisfy or fail.
pub trait Criteria<T> {
    /// Returns true if `candidate` satisfies every constraint.
    fn matches(&self, candidate: &T) -> bool;
}

/// Return the candidates satisfying `criteria`, in their original order.
///
/// An empty input yields an empty result; this is a normal outcome, not an
/// error. Callers decide whether an empty selection is fatal.
pub fn filter<'a, T, C: Criteria<T>>(candidates: &'a [T], criteria: &C) -> Vec<&'a T> {
    candidates
        .iter()
        .filter(|candidate| criteria.matches(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvenOnly;

    impl Criteria<u32> for EvenOnly {
        fn matches(&self, candidate: &u32) -> bool {
            candidate % 2 == 0
        }
    }

    #[test]
    fn preserves_input_order() {
        let values = [4, 1, 2, 8, 3, 6];
        let selected = filter(&values, &EvenOnly);
        assert_eq!(selected, [&4, &2, &8, &6]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let values: [u32; 0] = [];
        assert!(filter(&values, &EvenOnly).is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let values = [1, 3, 5];
        assert!(filter(&values, &EvenOnly).is_empty());
    }
}
