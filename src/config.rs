use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

pub const DEFAULT_LOG_FILTER: &str = "expense_tracker=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `expense_tracker=debug`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Config {
    /// Build from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::with_log_filter(std::env::var(LOG_ENV_VAR).ok())
    }

    /// Blank or missing filters keep the default.
    fn with_log_filter(filter: Option<String>) -> Self {
        match filter {
            Some(filter) if !filter.trim().is_empty() => Self { log_filter: filter },
            _ => Self::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    /// Load a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&data)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
