//! Exhaustive exploration pipeline.
//!
//! # Algorithm
//!
//! 1. Build the base timeline and arrangement count (rejects bad input).
//! 2. Enumerate every arrangement lexicographically (or sample some).
//! 3. Filter each candidate by arrival validity.
//! 4. Compute metrics for each valid candidate.
//!
//! Every iteration is independent; no state is shared between candidates
//! beyond the read-only process set.
//!
//! # Complexity
//! O(A * n * p) where A = arrangements, n = slots, p = processes.

use std::ops::ControlFlow;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::feasibility::is_valid;
use super::kpi::{AverageMode, TimelineMetrics};
use crate::enumeration::{build_baseline, enumerate_timelines, sample_timelines, Baseline};
use crate::error::EngineError;
use crate::models::{Process, Timeline};

/// Tolerance when comparing averages for ties.
const TIE_EPSILON: f64 = 1e-9;

/// A candidate timeline as seen by the per-candidate hook.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// 0-based lexicographic index.
    pub index: u128,
    /// The arrangement.
    pub timeline: &'a Timeline,
    /// Whether it passed the validity filter.
    pub valid: bool,
}

/// A valid timeline with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedTimeline {
    /// 0-based lexicographic index among all arrangements.
    pub index: u128,
    /// The arrangement.
    pub timeline: Timeline,
    /// Its metrics.
    pub metrics: TimelineMetrics,
}

/// Which average to rank timelines by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankKey {
    /// Average turnaround time.
    Turnaround,
    /// Average wait time.
    Wait,
}

impl RankKey {
    fn value(self, e: &EvaluatedTimeline) -> f64 {
        match self {
            RankKey::Turnaround => e.metrics.avg_turnaround,
            RankKey::Wait => e.metrics.avg_wait,
        }
    }
}

/// Result of exploring a process set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exploration {
    /// The process set explored.
    pub processes: Vec<Process>,
    /// Base timeline and arrangement count.
    pub baseline: Baseline,
    /// Number of candidates examined.
    pub examined: u128,
    /// Whether the hook stopped exploration early.
    pub stopped_early: bool,
    /// Whether candidates were sampled rather than enumerated.
    pub sampled: bool,
    /// Valid timelines in discovery (lexicographic) order.
    pub valid: Vec<EvaluatedTimeline>,
}

impl Exploration {
    /// Number of valid timelines found.
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// All valid timelines tying for the minimum of `key`.
    pub fn best_by(&self, key: RankKey) -> Vec<&EvaluatedTimeline> {
        let Some(min) = self
            .valid
            .iter()
            .map(|e| key.value(e))
            .min_by(|a, b| a.total_cmp(b))
        else {
            return Vec::new();
        };
        self.valid
            .iter()
            .filter(|e| key.value(e) - min < TIE_EPSILON)
            .collect()
    }

    /// All valid timelines tying for the minimum average turnaround.
    pub fn best_by_turnaround(&self) -> Vec<&EvaluatedTimeline> {
        self.best_by(RankKey::Turnaround)
    }

    /// All valid timelines tying for the minimum average wait.
    pub fn best_by_wait(&self) -> Vec<&EvaluatedTimeline> {
        self.best_by(RankKey::Wait)
    }

    /// The `k` best valid timelines by `key`; ties keep discovery order.
    pub fn top_k(&self, k: usize, key: RankKey) -> Vec<&EvaluatedTimeline> {
        let mut ranked: Vec<&EvaluatedTimeline> = self.valid.iter().collect();
        ranked.sort_by(|a, b| key.value(a).total_cmp(&key.value(b)));
        ranked.truncate(k);
        ranked
    }
}

/// Runs base builder, enumerator, filter, and metrics over a process set.
///
/// # Example
/// ```
/// use u_interleave::evaluation::Explorer;
/// use u_interleave::models::Process;
///
/// let ps = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
/// let exploration = Explorer::new(&ps).unwrap().explore().unwrap();
/// assert_eq!(exploration.examined, 3);
/// assert_eq!(exploration.valid_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Explorer<'a> {
    processes: &'a [Process],
    baseline: Baseline,
    averaging: AverageMode,
}

impl<'a> Explorer<'a> {
    /// Creates an explorer, validating the process set.
    pub fn new(processes: &'a [Process]) -> Result<Self, EngineError> {
        let baseline = build_baseline(processes)?;
        Ok(Self {
            processes,
            baseline,
            averaging: AverageMode::default(),
        })
    }

    /// Sets how metrics are averaged.
    pub fn with_averaging(mut self, averaging: AverageMode) -> Self {
        self.averaging = averaging;
        self
    }

    /// The base timeline and arrangement count.
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Explores every arrangement.
    pub fn explore(&self) -> Result<Exploration, EngineError> {
        self.explore_with(|_| ControlFlow::Continue(()))
    }

    /// Explores every arrangement, calling `hook` after each candidate.
    ///
    /// Returning `ControlFlow::Break` from the hook stops exploration; the
    /// result then covers only the candidates examined so far.
    pub fn explore_with<F>(&self, hook: F) -> Result<Exploration, EngineError>
    where
        F: FnMut(&Candidate<'_>) -> ControlFlow<()>,
    {
        let candidates = (0u128..).zip(enumerate_timelines(&self.baseline.timeline));
        self.run(candidates, hook, false)
    }

    /// Explores `count` uniformly sampled arrangements (with replacement).
    ///
    /// Indices are drawn up front; each timeline is unranked only when the
    /// pipeline reaches it, so an early `Break` skips the rest.
    pub fn explore_sample<R, F>(
        &self,
        count: usize,
        rng: &mut R,
        hook: F,
    ) -> Result<Exploration, EngineError>
    where
        R: Rng,
        F: FnMut(&Candidate<'_>) -> ControlFlow<()>,
    {
        let candidates =
            sample_timelines(&self.baseline, count, rng).map(|s| (s.index, s.timeline));
        self.run(candidates, hook, true)
    }

    fn run<I, F>(&self, candidates: I, mut hook: F, sampled: bool) -> Result<Exploration, EngineError>
    where
        I: Iterator<Item = (u128, Timeline)>,
        F: FnMut(&Candidate<'_>) -> ControlFlow<()>,
    {
        let mut examined: u128 = 0;
        let mut stopped_early = false;
        let mut valid = Vec::new();

        for (index, timeline) in candidates {
            examined += 1;
            let ok = is_valid(&timeline, self.processes);
            let flow = hook(&Candidate {
                index,
                timeline: &timeline,
                valid: ok,
            });

            if ok {
                let metrics =
                    TimelineMetrics::calculate_with(&timeline, self.processes, self.averaging)?;
                valid.push(EvaluatedTimeline {
                    index,
                    timeline,
                    metrics,
                });
            }

            if flow.is_break() {
                stopped_early = true;
                break;
            }
        }

        info!(
            examined = %examined,
            valid = valid.len(),
            sampled,
            stopped_early,
            "exploration finished"
        );

        Ok(Exploration {
            processes: self.processes.to_vec(),
            baseline: self.baseline.clone(),
            examined,
            stopped_early,
            sampled,
            valid,
        })
    }
}
