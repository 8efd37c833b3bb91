//! Log filter set-up for the binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to `info` when it is unset or empty.
///
/// `debug` raises the global level to debug on top of whatever `RUST_LOG` selected.
pub fn env_filter(debug: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(Level::INFO.as_str()));
    if debug {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}
