//! Tracing subscriber setup for hosts that do not install their own

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `filter` takes precedence; otherwise `RUST_LOG` is used, then `info`.
pub fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
