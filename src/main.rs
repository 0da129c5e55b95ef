//! Command-line explorer.
//!
//! Loads a process set, enumerates (or samples) every interleaving, and
//! prints the valid ones with their average turnaround and wait times.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use u_interleave::config::{OutputFormat, RunConfig};
use u_interleave::evaluation::{AverageMode, Candidate, Exploration, Explorer};
use u_interleave::input::{default_processes, load_processes};
use u_interleave::models::Process;
use u_interleave::report::{reporter_for, Reporter};
use u_interleave::telemetry::init_tracing;

/// Exhaustively evaluate every single-CPU interleaving of a process set
#[derive(Parser, Debug)]
#[command(name = "u-interleave", version)]
#[command(about = "Evaluate every CPU interleaving of a process set", long_about = None)]
struct Cli {
    /// Process as ID:RUN[:ARRIVAL], e.g. B:4:1 (repeatable)
    #[arg(short, long = "process", value_name = "SPEC")]
    processes: Vec<Process>,

    /// JSON file with an array of {id, run_length, arrival_time}
    #[arg(short, long, value_name = "FILE", conflicts_with = "processes")]
    input: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Shorthand for --format csv
    #[arg(long, default_value_t = false, conflicts_with = "format")]
    csv: bool,

    /// Do not list every candidate timeline (text format)
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Weight averages by run length
    #[arg(long, default_value_t = false)]
    weighted: bool,

    /// Sample N random arrangements instead of enumerating all
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,

    /// Best timelines to summarize per metric
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Explain validity and metrics per process on stderr
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let format = if self.csv {
            OutputFormat::Csv
        } else {
            self.format
        };
        let averaging = if self.weighted {
            AverageMode::RunLengthWeighted
        } else {
            AverageMode::Unweighted
        };
        let mut config = RunConfig::new()
            .with_format(format)
            .with_candidates(!self.quiet)
            .with_averaging(averaging)
            .with_top(self.top)
            .with_debug(self.debug);
        if let Some(count) = self.sample {
            config = config.with_sample(count, self.seed);
        }
        config
    }

    fn process_set(&self) -> Result<Vec<Process>> {
        if let Some(path) = &self.input {
            return load_processes(path).context("loading process set");
        }
        if self.processes.is_empty() {
            Ok(default_processes())
        } else {
            Ok(self.processes.clone())
        }
    }
}

fn explore(
    processes: &[Process],
    config: &RunConfig,
    reporter: &dyn Reporter,
    out: &mut dyn Write,
) -> Result<Exploration> {
    let explorer = Explorer::new(processes)?.with_averaging(config.averaging);
    reporter.write_header(processes, explorer.baseline(), out)?;

    let mut write_error = None;
    let hook = |candidate: &Candidate<'_>| match reporter.write_candidate(candidate, out) {
        Ok(()) => ControlFlow::Continue(()),
        Err(e) => {
            write_error = Some(e);
            ControlFlow::Break(())
        }
    };

    let exploration = match config.sample {
        Some(count) => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            explorer.explore_sample(count, &mut rng, hook)?
        }
        None => explorer.explore_with(hook)?,
    };

    if let Some(e) = write_error {
        return Err(e).context("writing candidate list");
    }
    Ok(exploration)
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.run_config();
    init_tracing(config.log_level());
    info!(?config, "starting");

    let processes = cli.process_set()?;
    let reporter = reporter_for(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exploration = explore(&processes, &config, reporter.as_ref(), &mut out)?;
    reporter
        .write_report(&exploration, &mut out)
        .context("writing report")?;
    out.flush().context("flushing output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
