//! Logging Infrastructure
//!
//! Structured logging setup shared by embedders and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is not set (e.g., "info", "debug")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init logger: {e}"))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init logger: {e}"))?;
    }

    Ok(())
}
