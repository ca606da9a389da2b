//! Logging system.
//!
//! Structured logging via `tracing`. Logs go to stderr by default so that
//! command output on stdout stays machine-readable. The CONVENE_LOG
//! environment variable overrides the configured level using the usual
//! env-filter syntax.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order: CONVENE_LOG environment variable, then the supplied
/// configuration, then defaults.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CommandError> {
    let filter = build_env_filter(config)?;
    let base = Registry::default().with(filter);

    match config.format.as_str() {
        "json" => {
            base.with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
        }
        "text" => {
            base.with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .init();
        }
        other => {
            return Err(CommandError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            )));
        }
    }

    Ok(())
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, CommandError> {
    if let Ok(filter) = EnvFilter::try_from_env("CONVENE_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| CommandError::Config(format!("Invalid log level '{}': {}", config.level, e)))
}
