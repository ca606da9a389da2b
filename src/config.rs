//! Configuration system.
//!
//! Hierarchical configuration merged from the global config file, an
//! optional workspace file, and environment variable overrides. The
//! connection section tells the CLI where the platform's admin API lives
//! and how to authenticate; token acquisition itself is out of scope, the
//! token is simply read from configuration or the environment.

use crate::error::CommandError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod loader;

pub use loader::ConfigLoader;

pub const TOKEN_ENV_VAR: &str = "CONVENE_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "CONVENE_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.convene.example/v1.0";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConveneConfig {
    /// Connection to the platform's admin API
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// API base URL, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access token. Usually left unset in files and supplied via the
    /// CONVENE_TOKEN environment variable.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl ConnectionConfig {
    /// Resolve the access token: explicit config value first, then the
    /// environment.
    pub fn token(&self) -> Result<String, CommandError> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            CommandError::Config(format!(
                "No access token configured. Set {} or connection.token in config.toml",
                TOKEN_ENV_VAR
            ))
        })
    }

    /// Validate connection settings before any command runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(format!("Invalid base URL: {}", self.base_url));
        }
        Ok(())
    }
}
