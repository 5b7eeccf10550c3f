// Logging setup built on tracing

use tracing::Level;
use tracing_subscriber::EnvFilter;

// Filters by RUST_LOG, defaulting to info; a second call is ignored
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
