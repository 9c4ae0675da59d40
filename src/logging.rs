//! Diagnostic logging via `tracing`.
//!
//! The filter comes from `RUST_LOG` when set, otherwise `info`
//! (`debug` with `--verbose`). Output goes to stderr so report and JSON
//! output on stdout stay clean.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
