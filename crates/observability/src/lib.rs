//! Process-wide logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Filter comes from `RUST_LOG` (default `info`); output is JSON lines with
/// timestamps. Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
