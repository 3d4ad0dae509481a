//! Log output for hosts embedding the crate.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "inkboard=info";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, or
/// `inkboard=info` when it is unset or invalid. Later calls, or calls after
/// the host installed its own subscriber, do nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("logging initialised");
    }
}
