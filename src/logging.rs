//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr and stay out of the translated output. `RUST_LOG`
//! takes precedence; otherwise `--verbose` selects `debug`, and the default
//! is `warn`.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!crate::output::is_no_color())
        .try_init();
}
