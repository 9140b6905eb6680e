//! Procurely logging setup
//!
//! Library code only emits through the standard `log` macros. Binaries call
//! [`init_logging`] once at startup to install an `env_logger` backend that
//! renders either human-readable lines or one JSON object per line.
//!
//! # Example
//!
//! ```rust,no_run
//! use procurely_core::config::LoggingConfig;
//!
//! procurely_core::logging::init_logging(&LoggingConfig::default()).unwrap();
//! log::info!("Resolver ready");
//! ```

use crate::config::LoggingConfig;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Once;
use thiserror::Error;

static INIT: Once = Once::new();

/// Log levels in order of severity (compatible with standard log crate)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How log lines are rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// `2024-01-15T10:30:00.000Z INFO [target] message`
    Human,
    /// `{"timestamp":"...","level":"INFO","target":"...","message":"..."}`
    Json,
}

#[derive(Debug, Error)]
#[error("unrecognized {kind}: \"{value}\"")]
pub struct ParseLogError {
    kind: &'static str,
    value: String,
}

impl FromStr for LogLevel {
    type Err = ParseLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ParseLogError { kind: "log level", value: s.to_string() }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ParseLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            _ => Err(ParseLogError { kind: "log format", value: s.to_string() }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Human => f.write_str("human"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Render one record as a JSON line body
fn format_json(timestamp: &str, level: log::Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "timestamp": timestamp,
        "level": level.to_string(),
        "target": target,
        "message": message,
    })
    .to_string()
}

/// Initialize the logging backend
///
/// Safe to call multiple times; only the first call installs a logger.
/// Returns an error when the configured level or format is invalid.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let level = config.log_level()?;
    let format = config.log_format()?;

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level.into());

        if format == LogFormat::Json {
            builder.format(|buf, record| {
                let timestamp = buf.timestamp_millis().to_string();
                let message = record.args().to_string();
                let line = format_json(&timestamp, record.level(), record.target(), &message);
                writeln!(buf, "{}", line)
            });
        } else {
            builder.format_timestamp_millis().format_module_path(false);
        }

        // Another logger may already be installed by the host application.
        let _ = builder.try_init();
    });

    Ok(())
}
