//! Winner resolution

use serde::{Deserialize, Serialize};

use super::choices::ChoiceSet;
use super::geometry::active_slice_at;

/// Winning slice for a final rotation.
///
/// Shares `active_slice_at` with the live crossing detector so the result
/// always matches the last slice ticked.
#[inline]
pub fn resolve(final_angle: f64, count: usize) -> usize {
    active_slice_at(final_angle, count)
}

/// A resolved spin result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub index: usize,
    pub label: String,
}

impl Outcome {
    /// Resolve the winner and look up its label
    pub fn from_angle(final_angle: f64, choices: &ChoiceSet) -> Self {
        let index = resolve(final_angle, choices.len());
        Self::from_index(index, choices)
    }

    pub fn from_index(index: usize, choices: &ChoiceSet) -> Self {
        // Choices may have been replaced mid-spin; wrap onto the current set
        let index = index % choices.len();
        let label = choices.get(index).unwrap_or_default().to_string();
        Self { index, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn abcd() -> ChoiceSet {
        ChoiceSet::parse("A\nB\nC\nD")
    }

    #[test]
    fn test_resolve_at_rest() {
        let outcome = Outcome::from_angle(0.0, &abcd());
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.label, "A");
    }

    #[test]
    fn test_resolve_quarter_turn() {
        let outcome = Outcome::from_angle(FRAC_PI_2, &abcd());
        assert_eq!(outcome.index, 3);
        assert_eq!(outcome.label, "D");
    }

    #[test]
    fn test_single_choice() {
        let single = ChoiceSet::parse("Only");
        for angle in [0.0, 1.0, 100.0, -3.0] {
            assert_eq!(Outcome::from_angle(angle, &single).label, "Only");
        }
    }

    #[test]
    fn test_from_index_wraps_on_shrunk_set() {
        let outcome = Outcome::from_index(5, &abcd());
        assert_eq!(outcome.index, 1);
        assert_eq!(outcome.label, "B");
    }

    proptest! {
        #[test]
        fn prop_resolve_matches_live_detector(angle in -1.0e9f64..1.0e9, count in 1usize..100) {
            prop_assert_eq!(resolve(angle, count), active_slice_at(angle, count));
            prop_assert!(resolve(angle, count) < count);
        }
    }
}
