//! Target-sum subset search.
//!
//! The search walks the sequence by position and, at each position, first
//! tries taking the value into the subset and then tries leaving it out.
//! It stops at the first branch that reaches the target. The remaining
//! target is carried as `i128`, so any number of `i64` subtractions stays
//! in range.

use crate::domain::model::Problem;
use crate::domain::ports::Searcher;
use std::collections::HashSet;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Returns whether some subset of positions in `sequence` sums to `target`.
///
/// The empty subset counts, so an empty sequence succeeds exactly when
/// `target == 0`. Runs in O(2^n) time and recurses once per element.
pub fn exists_subset_summing_to(sequence: &[i64], target: i64) -> bool {
    group_sum(sequence, 0, i128::from(target))
}

fn group_sum(sequence: &[i64], index: usize, remaining: i128) -> bool {
    if index == sequence.len() {
        return remaining == 0;
    }

    group_sum(sequence, index + 1, remaining - i128::from(sequence[index]))
        || group_sum(sequence, index + 1, remaining)
}

fn group_sum_witness(
    sequence: &[i64],
    index: usize,
    remaining: i128,
    path: &mut Vec<usize>,
) -> bool {
    if index == sequence.len() {
        return remaining == 0;
    }

    path.push(index);
    if group_sum_witness(sequence, index + 1, remaining - i128::from(sequence[index]), path) {
        return true;
    }
    path.pop();

    group_sum_witness(sequence, index + 1, remaining, path)
}

/// Every subset of positions summing to `target`, each listed in ascending
/// index order, in the order the include-first search meets them.
pub fn all_subsets_summing_to(sequence: &[i64], target: i64) -> Vec<Vec<usize>> {
    let mut hits = Vec::new();
    let collect = walk(sequence, target, |path| {
        hits.push(path.to_vec());
        ControlFlow::<Infallible>::Continue(())
    });
    match collect {
        ControlFlow::Continue(()) => hits,
        ControlFlow::Break(never) => match never {},
    }
}

struct Frame {
    index: usize,
    remaining: i128,
    // path length of the parent frame when this one was pushed
    base: usize,
    taken: Option<usize>,
}

/// Depth-first walk over the include/exclude tree using a heap stack.
///
/// `on_hit` sees the positions of each satisfying subset in the same order
/// the recursive search would reach them, and may stop the walk early.
fn walk<B>(
    sequence: &[i64],
    target: i64,
    mut on_hit: impl FnMut(&[usize]) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let mut path: Vec<usize> = Vec::new();
    let mut stack = vec![Frame {
        index: 0,
        remaining: i128::from(target),
        base: 0,
        taken: None,
    }];

    while let Some(frame) = stack.pop() {
        path.truncate(frame.base);
        if let Some(position) = frame.taken {
            path.push(position);
        }

        if frame.index == sequence.len() {
            if frame.remaining == 0 {
                on_hit(&path)?;
            }
            continue;
        }

        let value = i128::from(sequence[frame.index]);
        // exclude is pushed first so include is explored first
        stack.push(Frame {
            index: frame.index + 1,
            remaining: frame.remaining,
            base: path.len(),
            taken: None,
        });
        stack.push(Frame {
            index: frame.index + 1,
            remaining: frame.remaining - value,
            base: path.len(),
            taken: Some(frame.index),
        });
    }

    ControlFlow::Continue(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSearcher;

impl Searcher for RecursiveSearcher {
    fn exists(&self, problem: &Problem) -> bool {
        exists_subset_summing_to(&problem.sequence, problem.target)
    }

    fn witness(&self, problem: &Problem) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        group_sum_witness(&problem.sequence, 0, i128::from(problem.target), &mut path)
            .then_some(path)
    }
}

/// Same search as [`RecursiveSearcher`] on an explicit stack, so sequence
/// length is bounded by memory rather than by the call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorklistSearcher;

impl Searcher for WorklistSearcher {
    fn exists(&self, problem: &Problem) -> bool {
        self.witness(problem).is_some()
    }

    fn witness(&self, problem: &Problem) -> Option<Vec<usize>> {
        match walk(&problem.sequence, problem.target, |path| {
            ControlFlow::Break(path.to_vec())
        }) {
            ControlFlow::Break(path) => Some(path),
            ControlFlow::Continue(()) => None,
        }
    }
}

/// Optimized variant: remembers `(index, remaining)` states already shown
/// to fail, so overlapping subproblems are explored once.
///
/// Only failures are cached. A successful state ends the search, so it is
/// never revisited.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSearcher;

impl MemoizedSearcher {
    fn search(
        sequence: &[i64],
        index: usize,
        remaining: i128,
        failed: &mut HashSet<(usize, i128)>,
        path: &mut Vec<usize>,
    ) -> bool {
        if index == sequence.len() {
            return remaining == 0;
        }
        if failed.contains(&(index, remaining)) {
            return false;
        }

        path.push(index);
        let taken = remaining - i128::from(sequence[index]);
        if Self::search(sequence, index + 1, taken, failed, path) {
            return true;
        }
        path.pop();

        if Self::search(sequence, index + 1, remaining, failed, path) {
            return true;
        }

        failed.insert((index, remaining));
        false
    }
}

impl Searcher for MemoizedSearcher {
    fn exists(&self, problem: &Problem) -> bool {
        self.witness(problem).is_some()
    }

    fn witness(&self, problem: &Problem) -> Option<Vec<usize>> {
        let mut failed = HashSet::new();
        let mut path = Vec::new();
        Self::search(
            &problem.sequence,
            0,
            i128::from(problem.target),
            &mut failed,
            &mut path,
        )
        .then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searchers() -> Vec<(&'static str, Box<dyn Searcher>)> {
        vec![
            ("recursive", Box::new(RecursiveSearcher)),
            ("iterative", Box::new(WorklistSearcher)),
            ("memoized", Box::new(MemoizedSearcher)),
        ]
    }

    #[test]
    fn test_empty_sequence() {
        assert!(exists_subset_summing_to(&[], 0));
        assert!(!exists_subset_summing_to(&[], 5));
        assert!(!exists_subset_summing_to(&[], -1));
    }

    #[test]
    fn test_known_cases() {
        assert!(exists_subset_summing_to(&[2, 4, 8], 10));
        assert!(!exists_subset_summing_to(&[2, 4, 8], 7));
        assert!(exists_subset_summing_to(&[-3, 1, 2], 0));
        assert!(exists_subset_summing_to(&[-3, 1, 2], -2));
        assert!(!exists_subset_summing_to(&[1, 2, 3], -1));
    }

    #[test]
    fn test_duplicates_are_distinct_positions() {
        assert!(exists_subset_summing_to(&[5, 5], 10));
        assert!(!exists_subset_summing_to(&[5], 10));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert!(exists_subset_summing_to(&[i64::MAX, i64::MAX, 1], i64::MAX));
        assert!(!exists_subset_summing_to(&[i64::MIN, i64::MIN], -1));
        assert!(exists_subset_summing_to(&[i64::MIN, i64::MAX], -1));
    }

    #[test]
    fn test_witness_prefers_include_first() {
        let problem = Problem::new(vec![2, 4, 8, 6], 10);
        for (name, searcher) in searchers() {
            // 2+8 is met before 4+6
            assert_eq!(searcher.witness(&problem), Some(vec![0, 2]), "{}", name);
        }
    }

    #[test]
    fn test_witness_for_zero_target_takes_whole_zero_sum() {
        let problem = Problem::new(vec![-3, 1, 2], 0);
        for (name, searcher) in searchers() {
            assert_eq!(searcher.witness(&problem), Some(vec![0, 1, 2]), "{}", name);
        }
    }

    #[test]
    fn test_witness_empty_subset() {
        let problem = Problem::new(vec![1, 2], 0);
        for (name, searcher) in searchers() {
            assert_eq!(searcher.witness(&problem), Some(vec![]), "{}", name);
            assert!(searcher.exists(&problem), "{}", name);
        }
    }

    #[test]
    fn test_searchers_report_absence() {
        let problem = Problem::new(vec![2, 4, 8], 7);
        for (name, searcher) in searchers() {
            assert!(!searcher.exists(&problem), "{}", name);
            assert_eq!(searcher.witness(&problem), None, "{}", name);
        }
    }

    #[test]
    fn test_all_subsets() {
        let hits = all_subsets_summing_to(&[1, 9, 11, 5, 6], 21);
        assert_eq!(hits, vec![vec![0, 1, 2], vec![0, 1, 3, 4]]);

        assert_eq!(all_subsets_summing_to(&[], 0), vec![Vec::<usize>::new()]);
        assert!(all_subsets_summing_to(&[2, 4, 8], 7).is_empty());
        assert_eq!(all_subsets_summing_to(&[5, 5], 5), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_all_subsets_walks_every_branch() {
        let hits = all_subsets_summing_to(&[0; 10], 0);
        assert_eq!(hits.len(), 1 << 10);
        assert_eq!(hits.first(), Some(&(0..10).collect::<Vec<_>>()));
        assert_eq!(hits.last(), Some(&Vec::new()));
    }

    #[test]
    fn test_worklist_handles_sequences_deeper_than_the_call_stack_would() {
        // taking every element is the first path tried
        let sequence = vec![1i64; 200_000];
        let problem = Problem::new(sequence, 200_000);
        assert!(WorklistSearcher.exists(&problem));
    }
}
