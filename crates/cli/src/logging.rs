//! Logging setup
//!
//! Diagnostics go through `tracing` to stderr. `--debug` turns on debug
//! events for the workspace crates; otherwise `RUST_LOG` decides.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::output::OutputConfig;

const DEFAULT_DIRECTIVES: &str = "warn";
const DEBUG_DIRECTIVES: &str = "warn,s3tools=debug,s3tools_core=debug,s3tools_s3=debug";

/// Filter directives for the given output configuration
pub fn directives(config: &OutputConfig) -> String {
    if config.debug {
        return DEBUG_DIRECTIVES.to_string();
    }

    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

/// Install the global subscriber
///
/// Calling it again is a no-op.
pub fn init(config: &OutputConfig) {
    let filter = EnvFilter::try_new(directives(config))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(config.debug),
        )
        .with(filter)
        .try_init();
}
