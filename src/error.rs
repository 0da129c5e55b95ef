//! Error types.
//!
//! Both core error kinds are unrecoverable for the current process set:
//! the caller aborts the run and no partial results are produced.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the enumeration and evaluation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed input: empty set, zero run length, negative arrival, duplicate id.
    #[error("invalid process set: {}", summarize(.errors))]
    InvalidProcessSet {
        /// Every problem detected, in detection order.
        errors: Vec<ValidationError>,
    },

    /// Internal invariant violation between a timeline and its process set.
    #[error("timeline corrupt for process {process}: {reason}")]
    TimelineCorrupt {
        /// Offending process identity.
        process: char,
        /// What was inconsistent.
        reason: String,
    },

    /// The arrangement count does not fit in exact 128-bit arithmetic.
    #[error("arrangement count for {slots} slots exceeds u128")]
    ArrangementOverflow {
        /// Total slot count of the process set.
        slots: usize,
    },
}

impl EngineError {
    /// Creates a timeline corruption error.
    pub fn timeline_corrupt(process: char, reason: impl Into<String>) -> Self {
        Self::TimelineCorrupt {
            process,
            reason: reason.into(),
        }
    }
}

impl From<Vec<ValidationError>> for EngineError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidProcessSet { errors }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while loading a process set.
#[derive(Error, Debug)]
pub enum InputError {
    /// The process file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process file is not a JSON array of processes.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A command-line process spec is not `ID:RUN:ARRIVAL`.
    #[error("bad process spec '{spec}': {reason}")]
    BadSpec { spec: String, reason: String },
}
