//! Logging and observability
//!
//! Structured console logging with configurable log levels. The `--debug`
//! flag raises the default filter to debug before any subcommand validation
//! runs.

use crate::domain::{DefenderError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// The filter honors `RUST_LOG` when set; otherwise it defaults to the given
/// level for this crate. Safe to call once per process.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("datadefender={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| DefenderError::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(DefenderError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
