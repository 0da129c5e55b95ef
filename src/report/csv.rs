//! CSV report.

use std::io::{self, Write};

use super::Reporter;
use crate::evaluation::Exploration;

/// Column header of the CSV report.
pub const CSV_HEADER: &str = "timeline,avg_tt,avg_wt";

/// One `timeline,avg_tt,avg_wt` row per valid timeline, 6 decimals.
#[derive(Debug, Clone, Default)]
pub struct CsvReporter;

impl CsvReporter {
    /// Creates a CSV reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for CsvReporter {
    fn write_report(&self, exploration: &Exploration, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{CSV_HEADER}")?;
        for e in &exploration.valid {
            writeln!(
                out,
                "{},{:.6},{:.6}",
                e.timeline, e.metrics.avg_turnaround, e.metrics.avg_wait
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::{render, scenario_b};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_csv_rows() {
        let out = render(&CsvReporter::new(), &scenario_b());
        assert_eq!(
            out,
            "timeline,avg_tt,avg_wt\nAAB,2.000000,0.500000\nABA,2.000000,0.500000\n"
        );
    }

    #[test]
    fn test_csv_header_only_when_nothing_valid() {
        use crate::evaluation::Explorer;
        use crate::models::Process;

        let ps = [Process::new('A', 1).with_arrival(9)];
        let ex = Explorer::new(&ps).unwrap().explore().unwrap();
        assert_eq!(render(&CsvReporter::new(), &ex), "timeline,avg_tt,avg_wt\n");
    }
}
