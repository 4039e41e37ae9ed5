//! Tracing setup for the harness binary

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the fmt subscriber at the configured level.
///
/// Diagnostics go to stderr so the per-phase status lines on stdout stay
/// parseable by whatever invoked the harness. `RUST_LOG` overrides the CLI
/// level when set.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("harness={log_level}")));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
