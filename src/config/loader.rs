//! Config loading: global file, optional explicit file, environment.

use super::{ConveneConfig, BASE_URL_ENV_VAR};
use crate::error::CommandError;
use config::{Config, File};
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Path to the global config file:
    /// $XDG_CONFIG_HOME/convene/config.toml or ~/.config/convene/config.toml.
    pub fn global_config_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("convene").join("config.toml"));
        }
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("convene")
                .join("config.toml")
        })
    }

    /// Load configuration from the default locations plus environment
    /// overrides.
    pub fn load() -> Result<ConveneConfig, CommandError> {
        let mut builder = Config::builder();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(
                    File::with_name(&global_path.to_string_lossy()).required(false),
                );
            }
        }

        let config: ConveneConfig = builder.build()?.try_deserialize()?;
        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from an explicit file, still honoring
    /// environment overrides.
    pub fn load_from_file(path: &Path) -> Result<ConveneConfig, CommandError> {
        if !path.exists() {
            return Err(CommandError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config: ConveneConfig = Config::builder()
            .add_source(File::with_name(&path.to_string_lossy()))
            .build()?
            .try_deserialize()?;
        Ok(Self::apply_env_overrides(config))
    }

    fn apply_env_overrides(mut config: ConveneConfig) -> ConveneConfig {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            config.connection.base_url = base_url;
        }
        if let Err(reason) = config.connection.validate() {
            warn!("Connection configuration invalid: {}", reason);
        }
        config
    }
}
