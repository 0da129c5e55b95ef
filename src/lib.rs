//! Exhaustive single-processor interleaving explorer.
//!
//! Enumerates every distinct way a fixed set of CPU-bound processes can be
//! interleaved on one processor, discards interleavings that run a process
//! before it arrives, and reports average turnaround and wait time for each
//! survivor. Instead of evaluating one policy (FCFS, SJF, round-robin), the
//! whole design space is laid out so the minimizing interleavings can be
//! inspected directly.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Timeline`
//! - **`validation`**: Process-set integrity checks (duplicate ids, zero runs)
//! - **`enumeration`**: Base timeline, exact multinomial count, lexicographic
//!   multiset-permutation enumerator, unranking, sampling
//! - **`evaluation`**: Arrival validity filter, turnaround/wait metrics,
//!   exploration pipeline and ranking
//! - **`report`**: Text, CSV and JSON renderers
//! - **`config`**, **`input`**, **`telemetry`**: Run configuration,
//!   process-set loading, logging setup
//!
//! # Example
//!
//! ```
//! use u_interleave::{build_baseline, compute_metrics, enumerate_timelines, is_valid};
//! use u_interleave::models::Process;
//!
//! let processes = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
//! let baseline = build_baseline(&processes).unwrap();
//!
//! let valid: Vec<_> = enumerate_timelines(&baseline.timeline)
//!     .filter(|t| is_valid(t, &processes))
//!     .collect();
//! assert_eq!(valid.len(), 2);
//!
//! let metrics = compute_metrics(&valid[0], &processes).unwrap();
//! assert!((metrics.avg_turnaround - 2.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.2

pub mod config;
pub mod enumeration;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod models;
pub mod report;
pub mod telemetry;
pub mod validation;

pub use enumeration::{build_baseline, enumerate_timelines};
pub use error::{EngineError, InputError};
pub use evaluation::{compute_metrics, is_valid};
