//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; applications that want to see
//! them can call [`init`] once at startup or install their own subscriber.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::config::LoggingConfig;
use crate::{RecencyError, RecencyResult};

/// Builds the filter: `RUST_LOG` first, then `recency=<level>` from config.
pub fn env_filter(config: &LoggingConfig) -> RecencyResult<EnvFilter> {
    let directive = format!("recency={}", config.level.to_lowercase())
        .parse::<Directive>()
        .map_err(|e| RecencyError::config(format!("invalid log level: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Installs a global subscriber writing to stderr in the configured format.
pub fn init(config: &LoggingConfig) -> RecencyResult<()> {
    let filter = env_filter(config)?;

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .try_init(),
        "text" => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init(),
        other => {
            return Err(RecencyError::config(format!(
                "unknown log format '{other}'"
            )))
        }
    };

    result.map_err(|e| RecencyError::config(format!("logging already initialized: {e}")))?;
    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
