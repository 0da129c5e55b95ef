//! Interleaving domain models.
//!
//! Provides the core data types for the exhaustive single-processor
//! explorer: the immutable process set and the candidate timeline.
//!
//! # Domain Mappings
//!
//! | u-interleave | CPU scheduling | Classic job shop |
//! |--------------|----------------|------------------|
//! | Process | Process / thread | Job |
//! | run_length | CPU burst (slots) | Processing time |
//! | arrival_time | Arrival | Release date |
//! | Timeline | Gantt chart | Sequence |

mod process;
mod timeline;

pub use process::{total_slots, Process};
pub use timeline::Timeline;
