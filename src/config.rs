//! Run configuration.
//!
//! Output mode, candidate listing, averaging, and sampling are carried
//! explicitly through this record; nothing is process-wide state. None of
//! these settings changes which timelines are valid or their metrics,
//! except `averaging`, which selects the mean used.

use serde::{Deserialize, Serialize};

use crate::evaluation::AverageMode;

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console listing.
    #[default]
    Text,
    /// `timeline,avg_tt,avg_wt` rows.
    Csv,
    /// Full exploration as JSON.
    Json,
}

/// Configuration for one exploration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Report format.
    pub format: OutputFormat,
    /// List every candidate with its validity (text format only).
    pub show_candidates: bool,
    /// Averaging mode for metrics.
    pub averaging: AverageMode,
    /// Sample this many arrangements instead of enumerating all.
    pub sample: Option<usize>,
    /// RNG seed for sampling. `None` = OS entropy.
    pub seed: Option<u64>,
    /// Number of best timelines to summarize per metric.
    pub top: usize,
    /// Emit per-process validity and metric explanations to the log.
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_candidates: true,
            averaging: AverageMode::Unweighted,
            sample: None,
            seed: None,
            top: 3,
            debug: false,
        }
    }
}

impl RunConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether every candidate is listed.
    pub fn with_candidates(mut self, show: bool) -> Self {
        self.show_candidates = show;
        self
    }

    /// Sets the averaging mode.
    pub fn with_averaging(mut self, averaging: AverageMode) -> Self {
        self.averaging = averaging;
        self
    }

    /// Enables sampling mode.
    pub fn with_sample(mut self, count: usize, seed: Option<u64>) -> Self {
        self.sample = Some(count);
        self.seed = seed;
        self
    }

    /// Sets the number of best timelines summarized.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Enables debug explanations.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Default log filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
