//! Lexicographic multiset-permutation enumerator.
//!
//! # Algorithm
//!
//! Next permutation with repeated elements:
//! 1. Find the rightmost `i` with `seq[i] < seq[i + 1]`. If none, stop.
//! 2. Find the rightmost `j > i` with `seq[j] > seq[i]`.
//! 3. Swap `seq[i]` and `seq[j]`, then reverse `seq[i + 1..]`.
//!
//! The reversed suffix is the minimal completion of the new prefix, so
//! starting from the sorted sequence every distinct arrangement is visited
//! exactly once, in strictly increasing order. Permuting positions
//! independently would instead yield `n!` sequences with duplicates.
//!
//! # Unranking
//!
//! [`nth_arrangement`] jumps to the k-th arrangement directly: at each slot
//! it skips whole blocks of arrangements sharing a smaller prefix, each
//! block sized by the multinomial of the remaining multiplicities.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.2, Algorithm L

use std::iter::FusedIterator;

use super::baseline::{multinomial, Baseline};
use crate::models::Timeline;

/// Advances `seq` to its next lexicographic arrangement in place.
///
/// Returns `false` and leaves `seq` unchanged when it is already the
/// maximal (non-increasing) arrangement.
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }

    let Some(i) = (0..seq.len() - 1).rev().find(|&i| seq[i] < seq[i + 1]) else {
        return false;
    };

    // seq[i + 1] > seq[i] by choice of i, so the search always succeeds.
    let j = seq[i + 1..]
        .iter()
        .rposition(|x| *x > seq[i])
        .map_or(i + 1, |offset| i + 1 + offset);

    seq.swap(i, j);
    seq[i + 1..].reverse();
    true
}

/// Lazy sequence of every distinct arrangement of a timeline's symbols.
///
/// Visits arrangements in strictly increasing lexicographic order, from the
/// sorted arrangement to the reverse-sorted one. Restart by calling
/// [`enumerate_timelines`] again.
#[derive(Debug, Clone)]
pub struct Arrangements {
    pending: Option<Vec<char>>,
}

impl Iterator for Arrangements {
    type Item = Timeline;

    fn next(&mut self) -> Option<Timeline> {
        let current = self.pending.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.pending = Some(successor);
        }
        Some(Timeline::new(current))
    }
}

impl FusedIterator for Arrangements {}

/// Enumerates every distinct arrangement of `base`.
///
/// Enumeration starts from the sorted arrangement of `base`'s symbols; for
/// a base built by [`build_baseline`](super::build_baseline) that is `base`
/// itself. The sequence has exactly `total_arrangements` items.
///
/// # Example
/// ```
/// use u_interleave::enumeration::enumerate_timelines;
/// use u_interleave::models::Timeline;
///
/// let all: Vec<String> = enumerate_timelines(&Timeline::from("AAB"))
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(all, ["AAB", "ABA", "BAA"]);
/// ```
pub fn enumerate_timelines(base: &Timeline) -> Arrangements {
    let mut start = base.slots().to_vec();
    start.sort_unstable();
    Arrangements {
        pending: Some(start),
    }
}

/// Returns the `index`-th arrangement (0-based, lexicographic) of `baseline`.
///
/// Returns `None` when `index >= baseline.total_arrangements`.
pub fn nth_arrangement(baseline: &Baseline, index: u128) -> Option<Timeline> {
    if index >= baseline.total_arrangements {
        return None;
    }

    let mut counts = baseline.symbol_counts();
    let mut remaining = index;
    let mut slots = Vec::with_capacity(baseline.slot_count());

    for _ in 0..baseline.slot_count() {
        for k in 0..counts.len() {
            if counts[k].1 == 0 {
                continue;
            }
            counts[k].1 -= 1;
            // Arrangements whose next slot is counts[k].0
            let block = multinomial(counts.iter().map(|&(_, n)| n))?;
            if remaining < block {
                slots.push(counts[k].0);
                break;
            }
            remaining -= block;
            counts[k].1 += 1;
        }
    }

    Some(Timeline::new(slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::build_baseline;
    use crate::models::Process;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn names(base: &str) -> Vec<String> {
        enumerate_timelines(&Timeline::from(base))
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_next_permutation_steps() {
        let mut seq = vec![1, 2, 3];
        assert!(next_permutation(&mut seq));
        assert_eq!(seq, vec![1, 3, 2]);
        assert!(next_permutation(&mut seq));
        assert_eq!(seq, vec![2, 1, 3]);
    }

    #[test]
    fn test_next_permutation_at_maximum() {
        let mut seq = vec!['C', 'B', 'A'];
        assert!(!next_permutation(&mut seq));
        assert_eq!(seq, vec!['C', 'B', 'A']);

        let mut one = vec!['A'];
        assert!(!next_permutation(&mut one));
        let mut empty: Vec<char> = Vec::new();
        assert!(!next_permutation(&mut empty));
    }

    #[test]
    fn test_enumerate_two_distinct() {
        assert_eq!(names("AB"), vec!["AB", "BA"]);
    }

    #[test]
    fn test_enumerate_with_repeats() {
        assert_eq!(names("AAB"), vec!["AAB", "ABA", "BAA"]);
    }

    #[test]
    fn test_enumerate_all_equal() {
        assert_eq!(names("AAAAA"), vec!["AAAAA"]);
    }

    #[test]
    fn test_enumerate_starts_sorted() {
        assert_eq!(names("BA"), vec!["AB", "BA"]);
    }

    #[test]
    fn test_enumerate_is_restartable() {
        let base = Timeline::from("AABB");
        let first: Vec<Timeline> = enumerate_timelines(&base).collect();
        let second: Vec<Timeline> = enumerate_timelines(&base).collect();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_fused() {
        let mut it = enumerate_timelines(&Timeline::from("A"));
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_default_set_count_and_endpoints() {
        let ps = [
            Process::new('A', 4),
            Process::new('B', 4).with_arrival(1),
            Process::new('C', 4).with_arrival(2),
        ];
        let b = build_baseline(&ps).unwrap();
        let all: Vec<Timeline> = enumerate_timelines(&b.timeline).collect();
        assert_eq!(all.len() as u128, b.total_arrangements);
        assert_eq!(all.first(), Some(&b.timeline));
        assert_eq!(all.last().map(|t| t.to_string()).as_deref(), Some("CCCCBBBBAAAA"));
    }

    #[test]
    fn test_nth_arrangement_matches_enumeration() {
        let ps = [Process::new('A', 2), Process::new('B', 2), Process::new('C', 1)];
        let b = build_baseline(&ps).unwrap();
        for (k, t) in enumerate_timelines(&b.timeline).enumerate() {
            assert_eq!(nth_arrangement(&b, k as u128), Some(t));
        }
        assert_eq!(nth_arrangement(&b, b.total_arrangements), None);
    }

    fn process_sets() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec(1u32..=3, 1..=3).prop_map(|runs| {
            runs.into_iter()
                .zip('A'..)
                .map(|(run, id)| Process::new(id, run))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_yields_exact_distinct_count(ps in process_sets()) {
            let b = build_baseline(&ps).unwrap();
            let all: Vec<Timeline> = enumerate_timelines(&b.timeline).collect();
            prop_assert_eq!(all.len() as u128, b.total_arrangements);

            let distinct: HashSet<&Timeline> = all.iter().collect();
            prop_assert_eq!(distinct.len(), all.len());
        }

        #[test]
        fn prop_strictly_increasing_permutations(ps in process_sets()) {
            let b = build_baseline(&ps).unwrap();
            let all: Vec<Timeline> = enumerate_timelines(&b.timeline).collect();
            for pair in all.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for t in &all {
                let mut sorted = t.slots().to_vec();
                sorted.sort_unstable();
                prop_assert_eq!(sorted.as_slice(), b.timeline.slots());
            }
        }

        #[test]
        fn prop_last_is_reverse_sorted(ps in process_sets()) {
            let b = build_baseline(&ps).unwrap();
            let last = enumerate_timelines(&b.timeline).last().unwrap();
            let mut expected = b.timeline.slots().to_vec();
            expected.reverse();
            prop_assert_eq!(last.slots(), expected.as_slice());
        }

        #[test]
        fn prop_unrank_agrees(ps in process_sets(), pick in any::<u64>()) {
            let b = build_baseline(&ps).unwrap();
            let k = pick as u128 % b.total_arrangements;
            let expected = enumerate_timelines(&b.timeline).nth(k as usize);
            prop_assert_eq!(nth_arrangement(&b, k), expected);
        }
    }
}
