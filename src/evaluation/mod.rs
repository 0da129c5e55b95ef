//! Timeline evaluation.
//!
//! Filters candidate timelines by arrival causality, computes turnaround
//! and wait metrics for the survivors, and drives the full exploration.
//!
//! # Pipeline
//!
//! `Explorer` connects the base builder, the enumerator, the validity
//! filter and the metrics calculator. `Exploration` ranks the results so
//! the interleavings minimizing each metric can be inspected.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

mod explorer;
mod feasibility;
mod kpi;

pub use explorer::{Candidate, EvaluatedTimeline, Exploration, Explorer, RankKey};
pub use feasibility::{arrival_violations, is_valid, ArrivalViolation};
pub use kpi::{compute_metrics, AverageMode, ProcessMetrics, TimelineMetrics};
