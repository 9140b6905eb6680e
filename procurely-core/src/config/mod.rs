//! Configuration system for Procurely
//!
//! # Configuration Hierarchy
//!
//! Configuration values are resolved in the following order (highest priority wins):
//!
//! 1. **Code** (CLI flags, builder calls) - Highest priority
//! 2. **Environment Variables** - Override file config
//! 3. **Config File** (procurely.toml) - Override defaults
//! 4. **Defaults** - Lowest priority
//!
//! # Example
//!
//! ```no_run
//! use procurely_core::config::ProcurelyConfig;
//!
//! let config = ProcurelyConfig::load()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The fail-open department policy is deliberately absent from configuration.

pub mod access;
pub mod logging;

pub use access::AccessConfig;
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "procurely.toml";

/// Complete Procurely configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcurelyConfig {
    pub logging: LoggingConfig,
    pub access: AccessConfig,
}

impl ProcurelyConfig {
    /// Load configuration with full supersedence chain
    ///
    /// Priority order (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (procurely.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file (missing file means defaults)
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.logging.merge(other.logging);
        self.access.merge(other.access);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.logging.apply_env_vars();
        self.access.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.access.validate()?;
        Ok(())
    }
}
