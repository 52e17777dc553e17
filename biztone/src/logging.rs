use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stdout, filtered by `RUST_LOG` (default `info`).
///
/// ```no_run
/// use biztone::init_logging;
///
/// init_logging();
/// tracing::info!("ready");
/// ```
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
