//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before any timeline is
//! built. Detects:
//! - Empty process sets
//! - Duplicate process identities
//! - Zero run lengths
//! - Negative arrival times
//!
//! All problems are collected; validation does not stop at the first one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// The process set has no processes.
    EmptyProcessSet,
    /// Two processes share the same identity.
    DuplicateId,
    /// A process must occupy at least one slot.
    ZeroRunLength,
    /// A process arrives before slot 0.
    NegativeArrival,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate identities
/// 3. Every `run_length >= 1`
/// 4. Every `arrival_time >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.run_length < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroRunLength,
                format!("Process '{}' has run length {}", p.id, p.run_length),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at negative time {}", p.id, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new('A', 4),
            Process::new('B', 4).with_arrival(1),
            Process::new('C', 4).with_arrival(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_processes(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new('A', 1), Process::new('A', 2)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('A')));
    }

    #[test]
    fn test_zero_run_length() {
        let processes = vec![Process::new('A', 0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroRunLength);
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new('A', 1).with_arrival(-1)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_late_arrival_is_not_an_input_error() {
        // Infeasible, but well-formed: the filter rejects every timeline instead.
        let processes = vec![Process::new('A', 1).with_arrival(100)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new('A', 0),
            Process::new('A', 1).with_arrival(-2),
        ];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
