//! C14: Diagnostics. Structured, leveled logging across the walk/analyse/
//! resolve pipeline (§4.12). Pure observability: no emission here changes
//! engine output.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. `verbose` raises the default
/// filter from `warn` to `info`; `RUST_LOG` always overrides both.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pysource_metrics={default_level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
