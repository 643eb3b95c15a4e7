use serde::{Deserialize, Serialize};
use std::path::Path;

use super::display::DisplayConfig;
use super::errors::ConfigError;
use super::fail2ban::Fail2banConfig;
use super::history::{HistoryBackend, HistoryConfig, MAX_RETENTION_DAYS};
use super::logging::LoggingConfig;
use super::scheduler::SchedulerConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "jailwatch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/jailwatch/config.toml";

/// Main configuration structure for Jailwatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// How to reach the fail2ban client
    #[serde(default)]
    pub fail2ban: Fail2banConfig,

    /// Ban history storage and retention
    #[serde(default)]
    pub history: HistoryConfig,

    /// Background job intervals
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Timezones for display and for interpreting daemon output
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. jailwatch.toml in current directory
    /// 3. /etc/jailwatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(backend) = overrides.history_backend {
            self.history.backend = backend;
        }
        if let Some(path) = overrides.history_path {
            self.history.json_path = path;
        }
        if let Some(db) = overrides.database_path {
            self.history.database_path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.history.retention_days == 0 {
            return Err(ConfigError::Validation(
                "history.retention_days must be at least 1".to_string(),
            ));
        }

        if self.history.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::Validation(format!(
                "history.retention_days cannot exceed {}",
                MAX_RETENTION_DAYS
            )));
        }

        if self.scheduler.reconcile_interval_secs == 0 || self.scheduler.prune_interval_secs == 0
        {
            return Err(ConfigError::Validation(
                "Scheduler intervals must be greater than 0".to_string(),
            ));
        }

        if self.fail2ban.client_paths.is_empty() {
            return Err(ConfigError::Validation(
                "fail2ban.client_paths cannot be empty".to_string(),
            ));
        }

        if self.fail2ban.timeout_secs == 0 || self.fail2ban.ping_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fail2ban timeouts must be greater than 0".to_string(),
            ));
        }

        self.display.display_tz().map_err(ConfigError::Validation)?;
        self.display.source_tz().map_err(ConfigError::Validation)?;

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub history_backend: Option<HistoryBackend>,
    pub history_path: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
