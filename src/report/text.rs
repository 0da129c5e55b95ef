//! Console report.

use std::io::{self, Write};

use super::Reporter;
use crate::enumeration::Baseline;
use crate::evaluation::{Candidate, EvaluatedTimeline, Exploration, RankKey};
use crate::models::Process;

/// Human-readable listing of processes, candidates, and valid timelines.
///
/// Averages are printed with 3 decimals.
#[derive(Debug, Clone)]
pub struct TextReporter {
    show_candidates: bool,
    top: usize,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self {
            show_candidates: true,
            top: 3,
        }
    }
}

impl TextReporter {
    /// Creates a reporter listing candidates and the top 3 per metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether every candidate is listed.
    pub fn with_candidates(mut self, show: bool) -> Self {
        self.show_candidates = show;
        self
    }

    /// Sets how many best timelines are summarized per metric.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

/// `n!` as a float, for display only.
fn factorial_display(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}

fn write_evaluated(out: &mut dyn Write, e: &EvaluatedTimeline) -> io::Result<()> {
    writeln!(
        out,
        "{}: avgTT = {:.3}  avgWT = {:.3}",
        e.timeline, e.metrics.avg_turnaround, e.metrics.avg_wait
    )
}

impl Reporter for TextReporter {
    fn write_header(
        &self,
        processes: &[Process],
        baseline: &Baseline,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "Processes:")?;
        for p in processes {
            writeln!(out, "{p}")?;
        }
        writeln!(out)?;
        writeln!(out, "Execution timeline ingredients: {}", baseline.timeline)?;

        let numerator = factorial_display(baseline.slot_count());
        let denominator: f64 = processes.iter().map(|p| factorial_display(p.slots())).product();
        writeln!(
            out,
            "{numerator:.0} / {denominator:.0} = {} total permutations:",
            baseline.total_arrangements
        )
    }

    fn write_candidate(&self, candidate: &Candidate<'_>, out: &mut dyn Write) -> io::Result<()> {
        if !self.show_candidates {
            return Ok(());
        }
        let verdict = if candidate.valid { "valid" } else { "NOT valid" };
        writeln!(out, "{} {verdict}", candidate.timeline)
    }

    fn write_report(&self, exploration: &Exploration, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        if exploration.sampled {
            writeln!(
                out,
                "Sampled {} of {} arrangements.",
                exploration.examined, exploration.baseline.total_arrangements
            )?;
        } else if exploration.stopped_early {
            writeln!(
                out,
                "Stopped after {} of {} arrangements.",
                exploration.examined, exploration.baseline.total_arrangements
            )?;
        }

        writeln!(out, "{} Valid Timelines:", exploration.valid_count())?;
        for e in &exploration.valid {
            write_evaluated(out, e)?;
        }

        if self.top == 0 || exploration.valid.is_empty() {
            return Ok(());
        }
        for (label, key) in [
            ("turnaround", RankKey::Turnaround),
            ("wait", RankKey::Wait),
        ] {
            writeln!(out)?;
            let ties = exploration.best_by(key).len();
            writeln!(
                out,
                "Best by average {label} ({ties} timeline(s) tie for minimum):"
            )?;
            for e in exploration.top_k(self.top, key) {
                write_evaluated(out, e)?;
            }
        }
        Ok(())
    }
}
