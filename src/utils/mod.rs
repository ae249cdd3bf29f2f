pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Directive applied when neither `RUST_LOG` nor configuration supplies one.
pub const DEFAULT_LOG_FILTER: &str = "connelaide_core=info";

/// Installs the global fmt subscriber, logging to stderr.
///
/// `RUST_LOG` wins over `configured`, which wins over [`DEFAULT_LOG_FILTER`].
/// A second call is a no-op.
pub fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| configured.and_then(|directive| EnvFilter::try_new(directive).ok()))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
