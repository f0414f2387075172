//! Logging setup.
//!
//! The library only emits `tracing` events. Applications that want them
//! printed can install a subscriber built from a [`LogConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{LanaiError, LanaiResult};

/// Builds the event filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs a global `tracing` subscriber.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(LanaiError::Custom)` if a global subscriber is already set
pub fn init_logging(config: &LogConfig) -> LanaiResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
