//! Runtime preferences
//!
//! Behavior toggles resolved at startup: environment variables override
//! the defaults, and a TOML preferences file can override both. All
//! toggles are advisory; none affect the correctness invariants of the
//! scan (coverage stays gap-free whichever way they are set).
use crate::logging::LogLevel;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preferences file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Scanner behavior toggles
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerPreferences {
    /// Accumulate per-line token counters during document scans
    pub collect_detailed_metrics: bool,
    /// Emit whitespace runs as `Text` tokens. Disable only for consumers
    /// that treat uncovered columns as whitespace themselves.
    pub emit_whitespace_tokens: bool,
    /// Append line/column positions to diagnostic messages
    pub include_position_in_messages: bool,
    /// Log a statistics summary after each whole-document scan
    pub log_token_statistics: bool,
}

impl Default for ScannerPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env_flag("PROTOSCAN_DETAILED_METRICS", true),
            emit_whitespace_tokens: env_flag("PROTOSCAN_EMIT_WHITESPACE", true),
            include_position_in_messages: env_flag("PROTOSCAN_POSITION_IN_MESSAGES", false),
            log_token_statistics: env_flag("PROTOSCAN_LOG_STATISTICS", false),
        }
    }
}

/// Logging behavior toggles
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    pub min_log_level: LogLevel,
    /// Emit events as JSON lines instead of human-readable text
    pub use_structured_logging: bool,
    pub enable_console_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: if env_flag("PROTOSCAN_DEBUG", false) {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
            use_structured_logging: env_flag("PROTOSCAN_STRUCTURED_LOGS", false),
            enable_console_logging: env_flag("PROTOSCAN_CONSOLE_LOGS", true),
        }
    }
}

/// Complete runtime preference set
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub scanner: ScannerPreferences,
    pub logging: LoggingPreferences,
}

impl Preferences {
    /// Load preferences from a TOML file. Missing keys fall back to the
    /// environment-derived defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
