//! Diagnostics on stderr, so stdout only ever carries answers and reports.

use std::{io, sync::Once};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the filter, e.g. `AOC_LOG=aoc2024::runner=debug`.
pub const LOG_ENV: &str = "AOC_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
