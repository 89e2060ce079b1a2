//! Property tests for the subset search
//!
//! Verifies the documented cases plus determinism, reversal symmetry and
//! agreement between every searcher.

use group_sum::core::engine::searcher_for;
use group_sum::core::subset::all_subsets_summing_to;
use group_sum::domain::model::{Problem, Strategy as SearchStrategy};
use group_sum::domain::ports::Searcher;
use group_sum::exists_subset_summing_to;
use proptest::prelude::*;

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::Recursive,
    SearchStrategy::Iterative,
    SearchStrategy::Memoized,
];

#[test]
fn test_documented_cases() {
    assert!(exists_subset_summing_to(&[], 0));
    assert!(!exists_subset_summing_to(&[], 3));
    assert!(exists_subset_summing_to(&[2, 4, 8], 10));
    assert!(!exists_subset_summing_to(&[2, 4, 8], 7));
    assert!(exists_subset_summing_to(&[-3, 1, 2], 0));
}

#[test]
fn test_negative_target_without_negative_values() {
    assert!(!exists_subset_summing_to(&[1, 2, 3, 4], -1));
}

#[test]
fn test_twenty_one_combinations() {
    let sequence = [1, 9, 11, 5, 6];
    let values: Vec<Vec<i64>> = all_subsets_summing_to(&sequence, 21)
        .iter()
        .map(|subset| subset.iter().map(|&i| sequence[i]).collect())
        .collect();
    assert_eq!(values, vec![vec![1, 9, 11], vec![1, 9, 5, 6]]);
}

fn small_sequence() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..12)
}

proptest! {
    #[test]
    fn test_reversal_symmetry(sequence in small_sequence(), target in -60i64..60) {
        let mut reversed = sequence.clone();
        reversed.reverse();
        prop_assert_eq!(
            exists_subset_summing_to(&sequence, target),
            exists_subset_summing_to(&reversed, target)
        );
    }

    #[test]
    fn test_deterministic(sequence in small_sequence(), target in -60i64..60) {
        let first = exists_subset_summing_to(&sequence, target);
        let second = exists_subset_summing_to(&sequence, target);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_strategies_agree(sequence in small_sequence(), target in -60i64..60) {
        let problem = Problem::new(sequence, target);
        let expected = exists_subset_summing_to(&problem.sequence, problem.target);
        let expected_witness = searcher_for(SearchStrategy::Recursive).witness(&problem);

        for strategy in STRATEGIES {
            let searcher = searcher_for(strategy);
            prop_assert_eq!(searcher.exists(&problem), expected);
            prop_assert_eq!(searcher.witness(&problem), expected_witness.clone());
        }
    }

    #[test]
    fn test_witness_sums_to_target(sequence in small_sequence(), target in -60i64..60) {
        let problem = Problem::new(sequence, target);
        if let Some(witness) = searcher_for(SearchStrategy::Iterative).witness(&problem) {
            prop_assert!(witness.windows(2).all(|w| w[0] < w[1]));
            let sum: i64 = problem.values_at(&witness).iter().sum();
            prop_assert_eq!(sum, target);
        } else {
            prop_assert!(!exists_subset_summing_to(&problem.sequence, target));
        }
    }

    #[test]
    fn test_all_subsets_nonempty_iff_exists(sequence in prop::collection::vec(-9i64..9, 0..8), target in -30i64..30) {
        let all = all_subsets_summing_to(&sequence, target);
        prop_assert_eq!(!all.is_empty(), exists_subset_summing_to(&sequence, target));
        for subset in &all {
            let sum: i64 = subset.iter().map(|&i| sequence[i]).sum();
            prop_assert_eq!(sum, target);
        }
    }
}
