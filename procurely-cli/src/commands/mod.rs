pub mod filter;
pub mod permissions;
pub mod roles;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON document from disk
pub fn read_json(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Read a JSON array from disk
pub fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        _ => anyhow::bail!("{} must contain a JSON array", path.display()),
    }
}
