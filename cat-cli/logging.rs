//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Installs a `tracing` subscriber that logs to stderr.
///
/// The filter comes from the [`LOG_ENV`] variable using `EnvFilter` syntax,
/// e.g. `CAT_LOG=debug` or `CAT_LOG=cat_core=trace`. When the variable is
/// unset or invalid nothing is logged, so stderr carries only `cat:`
/// diagnostics. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
