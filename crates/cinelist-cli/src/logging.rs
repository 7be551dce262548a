//! Logging setup
//!
//! Diagnostics go through `tracing`. `RUST_LOG` takes precedence over the
//! `--log-level` flag. While the TUI owns the terminal, log output is
//! discarded so it cannot scribble over the alternate screen.

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

pub fn init(level: LogLevel, target: LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
}
