use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber filtered by `filter` (e.g. "info,dexplan_team=debug")
///
/// Fails if a global subscriber is already set.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
