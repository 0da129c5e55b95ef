//! Arrival-time validity filter.
//!
//! A timeline is valid iff no process occupies a slot before its arrival
//! time. Validity is binary: one violation anywhere rejects the timeline.

use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

use crate::models::{Process, Timeline};

/// A slot occupied by a process before it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalViolation {
    /// Offending process.
    pub process: char,
    /// Slot it occupies.
    pub slot: usize,
    /// Its arrival time.
    pub arrival_time: i64,
}

/// Slots a process may not occupy: `[0, min(arrival, len))`.
fn forbidden_prefix<'t>(timeline: &'t Timeline, process: &Process) -> &'t [char] {
    let horizon = process.arrival_slot().min(timeline.len());
    &timeline.slots()[..horizon]
}

/// Whether `timeline` respects every process's arrival time.
///
/// Pure: the result depends only on the timeline and the process set.
/// With debug logging enabled every process is checked and every
/// violation is logged; otherwise the first violation decides.
///
/// # Example
/// ```
/// use u_interleave::evaluation::is_valid;
/// use u_interleave::models::{Process, Timeline};
///
/// let ps = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
/// assert!(is_valid(&Timeline::from("ABA"), &ps));
/// assert!(!is_valid(&Timeline::from("BAA"), &ps));
/// ```
pub fn is_valid(timeline: &Timeline, processes: &[Process]) -> bool {
    if tracing::enabled!(Level::DEBUG) {
        return explain_validity(timeline, processes);
    }
    processes
        .iter()
        .all(|p| !forbidden_prefix(timeline, p).contains(&p.id))
}

/// Full walk of the validity check, logging each process and violation.
fn explain_validity(timeline: &Timeline, processes: &[Process]) -> bool {
    let mut valid = true;
    for p in processes {
        debug!(process = %p.id, timeline = %timeline, "checking process for validity");
        for v in process_violations(timeline, p) {
            debug!(
                process = %v.process,
                slot = v.slot,
                arrival_time = v.arrival_time,
                "not valid: process cannot be scheduled before it arrives"
            );
            valid = false;
        }
    }
    valid
}

fn process_violations<'t>(
    timeline: &'t Timeline,
    process: &'t Process,
) -> impl Iterator<Item = ArrivalViolation> + 't {
    forbidden_prefix(timeline, process)
        .iter()
        .enumerate()
        .filter(move |&(_, &s)| s == process.id)
        .map(move |(slot, _)| ArrivalViolation {
            process: process.id,
            slot,
            arrival_time: process.arrival_time,
        })
}

/// Every slot in `timeline` occupied before its process arrived.
///
/// Empty iff [`is_valid`] returns `true`.
pub fn arrival_violations(timeline: &Timeline, processes: &[Process]) -> Vec<ArrivalViolation> {
    processes
        .iter()
        .flat_map(|p| process_violations(timeline, p))
        .collect()
}
