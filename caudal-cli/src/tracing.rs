use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber, honoring `RUST_LOG` when set.
pub fn setup_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise tracing: {e}"))
}
