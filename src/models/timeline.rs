//! Timeline model.
//!
//! A timeline assigns every slot of the simulated horizon to one process
//! identity. It is the candidate interleaving produced by enumeration and
//! consumed by the validity filter and metrics calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One full assignment of time slots to process identities.
///
/// Slot `i` holds the identity of the process running during time `i`.
/// Ordering is lexicographic over the slots, which is the order the
/// enumerator visits arrangements in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Timeline {
    slots: Vec<char>,
}

impl Timeline {
    /// Creates a timeline from slot symbols.
    pub fn new(slots: Vec<char>) -> Self {
        Self { slots }
    }

    /// Slot symbols in time order.
    #[inline]
    pub fn slots(&self) -> &[char] {
        &self.slots
    }

    /// Number of time slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Last slot held by `id` (the slot in which it finishes).
    pub fn last_slot_of(&self, id: char) -> Option<usize> {
        self.slots.iter().rposition(|&s| s == id)
    }

    /// Number of slots held by `id`.
    pub fn occurrences(&self, id: char) -> usize {
        self.slots.iter().filter(|&&s| s == id).count()
    }
}

impl From<Vec<char>> for Timeline {
    fn from(slots: Vec<char>) -> Self {
        Self::new(slots)
    }
}

impl From<&str> for Timeline {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl From<String> for Timeline {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Timeline> for String {
    fn from(t: Timeline) -> Self {
        t.slots.into_iter().collect()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.slots {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}
