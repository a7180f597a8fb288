//! Diagnostic logging via `tracing` + `tracing-subscriber`.
//!
//! This is separate from the operator-facing [`EventLog`](crate::eventlog::EventLog).
//! Diagnostics go to stderr and are off unless asked for.
//!
//! Priority for determining the filter:
//! 1. `FIM_LOG` environment variable (any `EnvFilter` directive, e.g. "fimon=debug")
//! 2. `--verbose` → `debug`
//! 3. default to `warn`

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FIM_LOG";

/// Install the global subscriber. Call once, from `main`.
///
/// A second call is ignored rather than panicking.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
