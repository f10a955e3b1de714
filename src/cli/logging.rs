//! Structured logging to stderr.
//!
//! Log level precedence (highest to lowest):
//!
//! 1. CLI `--log-level`
//! 2. `FQ_LOG_LEVEL`
//! 3. `warn`

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Install the global subscriber. A subscriber that is already set wins.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter_str()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
