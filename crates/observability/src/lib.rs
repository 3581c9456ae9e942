//! Process-wide tracing/logging setup.

/// Initialize tracing for the process.
///
/// Filtering comes from `RUST_LOG` (default `info`); `LOG_FORMAT=json`
/// switches to JSON output for hosted deployments, anything else keeps the
/// human-readable format for dev runs. Safe to call multiple times;
/// subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

pub mod tracing;
