//! Engine configuration for wayfinder
//!
//! Configuration is an optional TOML file; every field has a default, so an
//! empty file and no file at all behave the same.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, WayfinderError};

pub use types::{EngineConfig, OutputConfig, SearchConfig, CONFIG_FORMAT_VERSION};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WayfinderError::not_found("config file", path.display()));
        }
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer wayfinder"
            );
        }

        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
