/*
[INPUT]:  Optional YAML configuration file and CLI overrides
[OUTPUT]: Parsed application configuration (endpoint, timeouts, logging)
[POS]:    Configuration layer - process setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use binance_futures_adapter::ClientConfig;
use binance_futures_adapter::http::client::TESTNET_BASE_URL;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the trading bot
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// REST base URL
    pub base_url: String,
    /// Per-request deadline in seconds
    pub timeout_secs: u64,
    /// Optional recvWindow in milliseconds for signed requests
    pub recv_window_ms: Option<u64>,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily log files
    pub dir: PathBuf,
    /// Console verbosity ("info", "debug", or an EnvFilter directive)
    pub console_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: TESTNET_BASE_URL.to_string(),
            timeout_secs: 10,
            recv_window_ms: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            console_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// File if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, log_dir: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(dir) = log_dir {
            self.logging.dir = dir;
        }
        if let Some(level) = log_level {
            self.logging.console_level = level;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            recv_window: self.recv_window_ms,
            ..ClientConfig::default()
        }
    }
}
