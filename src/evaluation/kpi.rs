//! Timeline quality metrics.
//!
//! Computes per-process turnaround and wait times for a valid timeline,
//! and their averages across the process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Finish slot | Last slot holding the process id (0-based) |
//! | Turnaround | finish - arrival + 1 |
//! | Wait | Slots in [arrival, finish) not held by the process |
//!
//! Wait counts every ready-but-idle slot before final completion, so a
//! process that is interrupted and resumed accumulates all of its gaps.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::models::{Process, Timeline};
use crate::validation::{ValidationError, ValidationErrorKind};

/// How per-process values are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AverageMode {
    /// Arithmetic mean across processes.
    #[default]
    Unweighted,
    /// Mean weighted by each process's run length.
    RunLengthWeighted,
}

/// Metrics for one process in one timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identity.
    pub id: char,
    /// Slot in which the process finishes.
    pub finish_slot: usize,
    /// Elapsed slots from arrival to finish, inclusive.
    pub turnaround: usize,
    /// Ready-but-not-running slots before finishing.
    pub wait: usize,
}

/// Timeline performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMetrics {
    /// Per-process values, in process-set order.
    pub per_process: Vec<ProcessMetrics>,
    /// Average turnaround time (slots).
    pub avg_turnaround: f64,
    /// Average wait time (slots).
    pub avg_wait: f64,
}

impl ProcessMetrics {
    /// Computes metrics for `process` within `timeline`.
    ///
    /// # Errors
    /// [`EngineError::TimelineCorrupt`] if the process never appears, holds
    /// a slot count other than its run length, or finishes before it arrives.
    pub fn calculate(timeline: &Timeline, process: &Process) -> Result<Self, EngineError> {
        let finish_slot = timeline
            .last_slot_of(process.id)
            .ok_or_else(|| EngineError::timeline_corrupt(process.id, "absent from timeline"))?;

        let held = timeline.occurrences(process.id);
        if held != process.slots() {
            return Err(EngineError::timeline_corrupt(
                process.id,
                format!("holds {held} slots, run length is {}", process.run_length),
            ));
        }

        let arrival = process.arrival_slot();
        if finish_slot < arrival {
            return Err(EngineError::timeline_corrupt(
                process.id,
                format!("finishes at slot {finish_slot} before arriving at {arrival}"),
            ));
        }

        let turnaround = finish_slot - arrival + 1;
        let wait = timeline.slots()[arrival..finish_slot]
            .iter()
            .filter(|&&s| s != process.id)
            .count();

        debug!(process = %process.id, turnaround, wait, "process metrics");

        Ok(Self {
            id: process.id,
            finish_slot,
            turnaround,
            wait,
        })
    }
}

impl TimelineMetrics {
    /// Computes unweighted metrics for a valid timeline.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Result<Self, EngineError> {
        Self::calculate_with(timeline, processes, AverageMode::Unweighted)
    }

    /// Computes metrics with the given averaging mode.
    ///
    /// # Errors
    /// [`EngineError::InvalidProcessSet`] for an empty process set, and
    /// [`EngineError::TimelineCorrupt`] as for [`ProcessMetrics::calculate`].
    ///
    /// # Arguments
    /// * `timeline` - A timeline that passed the validity filter.
    /// * `processes` - The process set it was built from.
    /// * `mode` - How per-process values are averaged.
    pub fn calculate_with(
        timeline: &Timeline,
        processes: &[Process],
        mode: AverageMode,
    ) -> Result<Self, EngineError> {
        if processes.is_empty() {
            return Err(vec![ValidationError::new(
                ValidationErrorKind::EmptyProcessSet,
                "Process set is empty",
            )]
            .into());
        }

        let per_process = processes
            .iter()
            .map(|p| ProcessMetrics::calculate(timeline, p))
            .collect::<Result<Vec<_>, _>>()?;

        let weights: Vec<f64> = match mode {
            AverageMode::Unweighted => vec![1.0; processes.len()],
            AverageMode::RunLengthWeighted => {
                processes.iter().map(|p| f64::from(p.run_length)).collect()
            }
        };
        let total_weight: f64 = weights.iter().sum();

        // Every process holds at least one slot, so total_weight > 0.
        let mean = |value: fn(&ProcessMetrics) -> usize| -> f64 {
            let sum: f64 = per_process
                .iter()
                .zip(&weights)
                .map(|(m, w)| value(m) as f64 * w)
                .sum();
            sum / total_weight
        };

        let avg_turnaround = mean(|m| m.turnaround);
        let avg_wait = mean(|m| m.wait);

        Ok(Self {
            per_process,
            avg_turnaround,
            avg_wait,
        })
    }

    /// Metrics for the process with identity `id`.
    pub fn for_process(&self, id: char) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.id == id)
    }
}

/// Computes unweighted metrics for a valid timeline.
///
/// # Example
/// ```
/// use u_interleave::evaluation::compute_metrics;
/// use u_interleave::models::{Process, Timeline};
///
/// let ps = [Process::new('A', 1), Process::new('B', 1)];
/// let m = compute_metrics(&Timeline::from("AB"), &ps).unwrap();
/// assert_eq!(m.for_process('B').unwrap().wait, 1);
/// assert!((m.avg_turnaround - 1.5).abs() < 1e-10);
/// ```
pub fn compute_metrics(
    timeline: &Timeline,
    processes: &[Process],
) -> Result<TimelineMetrics, EngineError> {
    TimelineMetrics::calculate(timeline, processes)
}
