//! Uniform random sampling of arrangements.
//!
//! For process sets whose arrangement count makes exhaustive enumeration
//! impractical, draws arrangement indices uniformly from
//! `0..total_arrangements` and unranks them. Draws are with replacement.

use rand::Rng;

use super::baseline::Baseline;
use super::permutation::nth_arrangement;
use crate::models::Timeline;

/// A sampled arrangement and its lexicographic index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledTimeline {
    /// 0-based lexicographic index among all arrangements.
    pub index: u128,
    /// The arrangement at `index`.
    pub timeline: Timeline,
}

/// Draws `count` uniform arrangement indices of `baseline`, sorted ascending.
pub fn sample_indices<R: Rng>(baseline: &Baseline, count: usize, rng: &mut R) -> Vec<u128> {
    if baseline.total_arrangements == 0 {
        return Vec::new();
    }
    let mut indices: Vec<u128> = (0..count)
        .map(|_| rng.random_range(0..baseline.total_arrangements))
        .collect();
    indices.sort_unstable();
    indices
}

/// Lazily unranked sample of arrangements, in index order.
///
/// Only the indices are held; each timeline is built when yielded.
#[derive(Debug, Clone)]
pub struct SampledTimelines<'a> {
    baseline: &'a Baseline,
    indices: std::vec::IntoIter<u128>,
}

impl Iterator for SampledTimelines<'_> {
    type Item = SampledTimeline;

    fn next(&mut self) -> Option<SampledTimeline> {
        let index = self.indices.next()?;
        let timeline = nth_arrangement(self.baseline, index)?;
        Some(SampledTimeline { index, timeline })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Draws `count` uniformly random arrangements of `baseline`.
///
/// Samples come out sorted by index, so they appear in enumeration order.
pub fn sample_timelines<'a, R: Rng>(
    baseline: &'a Baseline,
    count: usize,
    rng: &mut R,
) -> SampledTimelines<'a> {
    SampledTimelines {
        baseline,
        indices: sample_indices(baseline, count, rng).into_iter(),
    }
}
