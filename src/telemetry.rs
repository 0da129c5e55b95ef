//! Structured logging setup.
//!
//! Environment variables:
//! - RUST_LOG: log filter (overrides the configured default)
//!
//! Logs go to stderr so CSV and JSON reports on stdout stay parseable.
//! Colors are used only when stderr is a terminal.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` is unset or invalid. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(colored(&std::io::stderr()))
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn colored(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}
