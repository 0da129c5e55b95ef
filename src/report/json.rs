//! JSON report.

use std::io::{self, Write};

use super::Reporter;
use crate::evaluation::Exploration;

/// Serializes the full exploration, including per-process metrics.
#[derive(Debug, Clone, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Creates a JSON reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn write_report(&self, exploration: &Exploration, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, exploration)?;
        writeln!(out)
    }
}
