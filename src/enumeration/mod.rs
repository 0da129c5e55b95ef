//! Timeline generation.
//!
//! Builds the canonical base timeline of a process set and produces every
//! distinct arrangement of it, exactly once, in lexicographic order.
//!
//! # Submodules
//!
//! - `baseline`: sorted multiset sequence and exact arrangement count
//! - `permutation`: lazy lexicographic enumerator and unranking
//! - `sampling`: uniform random arrangements for large process sets
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.2

mod baseline;
mod permutation;
mod sampling;

pub use baseline::{build_baseline, multinomial, Baseline};
pub use permutation::{enumerate_timelines, next_permutation, nth_arrangement, Arrangements};
pub use sampling::{sample_indices, sample_timelines, SampledTimeline, SampledTimelines};
