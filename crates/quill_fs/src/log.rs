use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "QUILL_LOG";

/// Installs a global fmt subscriber. The filter is read from `QUILL_LOG`
/// and falls back to `default_filter`.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    debug!("Logging system initialized");
    Ok(())
}
