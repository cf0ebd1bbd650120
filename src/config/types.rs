//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::StateSnapshot;

use super::validation;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt shown by the interactive console
    pub prompt: String,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Days to keep rotated log files
    pub log_retention_days: u32,

    /// Numeric console state served to condition clauses and the demo
    /// runner (table format: `heat = 0`, `cash = 250`, ...)
    #[serde(default)]
    pub state: BTreeMap<String, i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            debug: false,
            log_path: default_log_path(),
            log_retention_days: 7,
            state: default_state(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Build a fresh read-only snapshot of the configured console state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.state.clone())
    }
}

/// Console state shipped with the default config.
fn default_state() -> BTreeMap<String, i64> {
    [("heat", 0), ("cash", 250), ("level", 1), ("energy", 100)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("cmdchain")
        })
        .join("logs")
}
