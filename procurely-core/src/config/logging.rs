//! Logging configuration

use crate::logging::{LogFormat, LogLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "human".to_string() }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("PROCURELY_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("PROCURELY_LOG_FORMAT") {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<LogLevel> {
        self.level
            .parse::<LogLevel>()
            .with_context(|| format!("Invalid logging.level: {}", self.level))
    }

    /// Parsed output format
    pub fn log_format(&self) -> Result<LogFormat> {
        self.format
            .parse::<LogFormat>()
            .with_context(|| format!("Invalid logging.format: {}", self.format))
    }
}
