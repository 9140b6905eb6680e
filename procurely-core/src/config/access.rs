//! Access-control configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Log the rule behind every visibility decision and every denial
    pub audit_enabled: bool,
}

impl AccessConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(audit) = env::var("PROCURELY_AUDIT_ENABLED") {
            self.audit_enabled = audit.parse().unwrap_or(false);
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}
