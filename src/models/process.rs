//! Process model.
//!
//! A process is a CPU-bound unit of work that must occupy a fixed number of
//! discrete time slots on a single processor, none of them before it arrives.
//!
//! # Time Representation
//! Time is measured in whole slots, 0-based. Slot `t` is the `t`-th position
//! of a [`Timeline`](super::Timeline).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A process competing for the processor.
///
/// Processes are immutable once defined. A process set is an ordered
/// `&[Process]`; its order is the canonical definition order used when
/// building the base timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique single-symbol identifier (e.g. `'A'`).
    pub id: char,
    /// Number of time slots this process must occupy in total.
    pub run_length: u32,
    /// Earliest slot in which this process may occupy the processor.
    pub arrival_time: i64,
}

impl Process {
    /// Creates a process arriving at slot 0.
    pub fn new(id: char, run_length: u32) -> Self {
        Self {
            id,
            run_length,
            arrival_time: 0,
        }
    }

    /// Sets the arrival time (earliest eligible slot).
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Arrival time as a slot index. Negative arrivals clamp to slot 0.
    #[inline]
    pub fn arrival_slot(&self) -> usize {
        usize::try_from(self.arrival_time).unwrap_or(0)
    }

    /// Run length as a slot count.
    #[inline]
    pub fn slots(&self) -> usize {
        self.run_length as usize
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of length {} arriving at time {}",
            self.id, self.run_length, self.arrival_time
        )
    }
}

/// Total number of slots a process set occupies.
pub fn total_slots(processes: &[Process]) -> usize {
    processes.iter().map(Process::slots).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new('B', 4).with_arrival(1);
        assert_eq!(p.id, 'B');
        assert_eq!(p.run_length, 4);
        assert_eq!(p.arrival_time, 1);
        assert_eq!(p.arrival_slot(), 1);
    }

    #[test]
    fn test_negative_arrival_clamps() {
        let p = Process::new('A', 1).with_arrival(-3);
        assert_eq!(p.arrival_slot(), 0);
    }

    #[test]
    fn test_display_matches_listing() {
        let p = Process::new('C', 4).with_arrival(2);
        assert_eq!(p.to_string(), "C of length 4 arriving at time 2");
    }

    #[test]
    fn test_total_slots() {
        let ps = [Process::new('A', 2), Process::new('B', 3)];
        assert_eq!(total_slots(&ps), 5);
        assert_eq!(total_slots(&[]), 0);
    }

    #[test]
    fn test_serde_shape() {
        let p: Process =
            serde_json::from_str(r#"{"id":"A","run_length":4,"arrival_time":0}"#).unwrap();
        assert_eq!(p, Process::new('A', 4));
    }
}
