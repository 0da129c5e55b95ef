//! Result rendering.
//!
//! Turns an [`Exploration`] into human- or machine-readable text. Reporters
//! only format; they never influence which timelines are valid.
//!
//! # Formats
//!
//! | Format | Content |
//! |--------|---------|
//! | Text | Process listing, candidate list, valid timelines, best summary |
//! | CSV | `timeline,avg_tt,avg_wt` header and one row per valid timeline |
//! | JSON | The full exploration |

mod csv;
mod json;
mod text;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use text::TextReporter;

use std::io::{self, Write};

use crate::config::{OutputFormat, RunConfig};
use crate::enumeration::Baseline;
use crate::evaluation::{Candidate, Exploration};
use crate::models::Process;

/// Renders exploration results.
///
/// Output is produced in three phases matching the pipeline: a header once
/// the base timeline is known, one optional line per candidate while
/// enumerating, and the final report.
pub trait Reporter {
    /// Writes the preamble before enumeration starts.
    fn write_header(
        &self,
        _processes: &[Process],
        _baseline: &Baseline,
        _out: &mut dyn Write,
    ) -> io::Result<()> {
        Ok(())
    }

    /// Writes one line for a candidate as it is examined.
    fn write_candidate(&self, _candidate: &Candidate<'_>, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    /// Writes the final report.
    fn write_report(&self, exploration: &Exploration, out: &mut dyn Write) -> io::Result<()>;
}

/// Selects the reporter for a run configuration.
pub fn reporter_for(config: &RunConfig) -> Box<dyn Reporter> {
    match config.format {
        OutputFormat::Text => Box::new(
            TextReporter::new()
                .with_candidates(config.show_candidates)
                .with_top(config.top),
        ),
        OutputFormat::Csv => Box::new(CsvReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::evaluation::{Exploration, Explorer};
    use crate::models::Process;

    pub fn scenario_b() -> Exploration {
        let ps = [Process::new('A', 2), Process::new('B', 1).with_arrival(1)];
        Explorer::new(&ps).unwrap().explore().unwrap()
    }

    pub fn render(reporter: &dyn super::Reporter, exploration: &Exploration) -> String {
        let mut buf = Vec::new();
        reporter.write_report(exploration, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }
}
