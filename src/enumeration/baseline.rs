//! Timeline base builder.
//!
//! Derives the canonical sorted multiset sequence from a process set and
//! counts its distinct arrangements exactly.
//!
//! # Arrangement Count
//!
//! For multiplicities `k_1..k_m` with `n = Σ k_i`, the number of distinct
//! arrangements is the multinomial coefficient `n! / Π k_i!`. It is
//! computed as a product of binomials `Π C(k_1 + .. + k_i, k_i)`, each built
//! incrementally so that every intermediate value is an exact integer.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineError;
use crate::models::{total_slots, Process, Timeline};
use crate::validation::validate_processes;

/// Arrangement counts above this trigger a warning; enumeration is factorial.
const LARGE_ENUMERATION: u128 = 10_000_000;

/// The lexicographically smallest timeline and its arrangement count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    /// Every process id repeated `run_length` times, sorted ascending.
    pub timeline: Timeline,
    /// Number of distinct arrangements of `timeline`.
    pub total_arrangements: u128,
}

impl Baseline {
    /// Symbol multiplicities in ascending symbol order.
    pub fn symbol_counts(&self) -> Vec<(char, usize)> {
        let mut counts: Vec<(char, usize)> = Vec::new();
        for &s in self.timeline.slots() {
            match counts.last_mut() {
                Some((last, n)) if *last == s => *n += 1,
                _ => counts.push((s, 1)),
            }
        }
        counts
    }

    /// Number of time slots.
    pub fn slot_count(&self) -> usize {
        self.timeline.len()
    }
}

/// Builds the base timeline for a process set.
///
/// The result is the concatenation of each process id repeated by its run
/// length, sorted ascending so the enumerator can start from the minimal
/// arrangement even when ids are not defined in ascending order.
///
/// # Errors
/// - [`EngineError::InvalidProcessSet`] for empty sets, duplicate ids,
///   zero run lengths, or negative arrivals.
/// - [`EngineError::ArrangementOverflow`] if the count exceeds `u128`.
///
/// # Example
/// ```
/// use u_interleave::enumeration::build_baseline;
/// use u_interleave::models::Process;
///
/// let processes = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
/// let baseline = build_baseline(&processes).unwrap();
/// assert_eq!(baseline.timeline.to_string(), "AAB");
/// assert_eq!(baseline.total_arrangements, 3);
/// ```
pub fn build_baseline(processes: &[Process]) -> Result<Baseline, EngineError> {
    validate_processes(processes)?;

    let slots = total_slots(processes);
    let mut symbols = Vec::with_capacity(slots);
    for p in processes {
        symbols.extend(std::iter::repeat(p.id).take(p.slots()));
    }
    symbols.sort_unstable();

    let total_arrangements = multinomial(processes.iter().map(Process::slots))
        .ok_or(EngineError::ArrangementOverflow { slots })?;

    if total_arrangements > LARGE_ENUMERATION {
        warn!(
            total_arrangements = %total_arrangements,
            "exhaustive enumeration will be slow; consider sampling"
        );
    }
    info!(
        slots,
        processes = processes.len(),
        total_arrangements = %total_arrangements,
        "baseline built"
    );

    Ok(Baseline {
        timeline: Timeline::new(symbols),
        total_arrangements,
    })
}

/// Exact multinomial coefficient `(Σ k)! / Π k!`.
///
/// Returns `None` on `u128` overflow.
pub fn multinomial<I>(counts: I) -> Option<u128>
where
    I: IntoIterator<Item = usize>,
{
    let mut result: u128 = 1;
    let mut placed: u128 = 0;
    for k in counts {
        let k = k as u128;
        // binom = C(placed + i, i) after step i
        let mut binom: u128 = 1;
        for i in 1..=k {
            binom = binom.checked_mul(placed + i)? / i;
        }
        placed += k;
        result = result.checked_mul(binom)?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_unit_processes() {
        let ps = [Process::new('A', 1), Process::new('B', 1)];
        let b = build_baseline(&ps).unwrap();
        assert_eq!(b.timeline, Timeline::from("AB"));
        assert_eq!(b.total_arrangements, 2);
    }

    #[test]
    fn test_repeated_run_lengths() {
        let ps = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
        let b = build_baseline(&ps).unwrap();
        assert_eq!(b.timeline, Timeline::from("AAB"));
        assert_eq!(b.total_arrangements, 3);
    }

    #[test]
    fn test_default_three_by_four() {
        let ps = [
            Process::new('A', 4),
            Process::new('B', 4).with_arrival(1),
            Process::new('C', 4).with_arrival(2),
        ];
        let b = build_baseline(&ps).unwrap();
        assert_eq!(b.timeline.to_string(), "AAAABBBBCCCC");
        // 12! / (4! 4! 4!)
        assert_eq!(b.total_arrangements, 34_650);
    }

    #[test]
    fn test_unsorted_ids_are_sorted() {
        let ps = [Process::new('C', 1), Process::new('A', 2)];
        let b = build_baseline(&ps).unwrap();
        assert_eq!(b.timeline.to_string(), "AAC");
    }

    #[test]
    fn test_single_process_one_arrangement() {
        for n in 1..=20 {
            let b = build_baseline(&[Process::new('A', n)]).unwrap();
            assert_eq!(b.total_arrangements, 1);
            assert_eq!(b.slot_count(), n as usize);
        }
    }

    #[test]
    fn test_symbol_counts() {
        let ps = [Process::new('B', 3), Process::new('A', 1)];
        let b = build_baseline(&ps).unwrap();
        assert_eq!(b.symbol_counts(), vec![('A', 1), ('B', 3)]);
    }

    #[test]
    fn test_rejects_zero_run_length() {
        let err = build_baseline(&[Process::new('A', 0)]).unwrap_err();
        match err {
            EngineError::InvalidProcessSet { errors } => {
                assert_eq!(errors[0].kind, ValidationErrorKind::ZeroRunLength);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = build_baseline(&[Process::new('A', 1), Process::new('A', 1)]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidProcessSet { .. }));
    }

    #[test]
    fn test_multinomial_values() {
        assert_eq!(multinomial(Vec::<usize>::new()), Some(1));
        assert_eq!(multinomial([5]), Some(1));
        assert_eq!(multinomial([1, 1, 1]), Some(6));
        assert_eq!(multinomial([2, 2]), Some(6));
        assert_eq!(multinomial([3, 2, 1]), Some(60));
        // 20! / (10! 10!)
        assert_eq!(multinomial([10, 10]), Some(184_756));
    }

    #[test]
    fn test_multinomial_beyond_f64_precision() {
        // 30 distinct symbols: 30! = 265252859812191058636308480000000
        let exact = multinomial(std::iter::repeat(1).take(30)).unwrap();
        assert_eq!(exact, 265_252_859_812_191_058_636_308_480_000_000);
    }

    #[test]
    fn test_multinomial_overflow() {
        assert_eq!(multinomial(std::iter::repeat(1).take(40)), None);
    }

    #[test]
    fn test_overflow_is_reported() {
        let ps: Vec<Process> = ('A'..='Z')
            .chain('a'..='z')
            .map(|id| Process::new(id, 1))
            .collect();
        let err = build_baseline(&ps).unwrap_err();
        assert_eq!(err, EngineError::ArrangementOverflow { slots: 52 });
    }
}
