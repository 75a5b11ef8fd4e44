use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `--verbose` is passed
pub const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive when RUST_LOG is not set.
pub fn filter_directive(log_level: &str, verbose: bool) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else {
        log_level
    }
}

/// Install the global tracing subscriber, writing compact lines to stderr.
///
/// RUST_LOG wins when set; otherwise `--verbose` selects debug output and
/// the configured level applies.
pub fn init(log_level: &str, verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(log_level, verbose);
            EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log level/filter '{}'", directive))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
