use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound for `retention_days` (about a century).
pub const MAX_RETENTION_DAYS: u32 = 36_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    #[default]
    Json,
    Sqlite,
}

impl HistoryBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryBackend::Json => "json",
            HistoryBackend::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for HistoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "file" => Ok(HistoryBackend::Json),
            "sqlite" | "db" => Ok(HistoryBackend::Sqlite),
            other => Err(format!("unknown history backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: HistoryBackend,

    #[serde(default = "default_json_path")]
    pub json_path: String,

    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Records whose ban started longer ago than this are dropped.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: HistoryBackend::default(),
            json_path: default_json_path(),
            database_path: default_database_path(),
            retention_days: default_retention_days(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_json_path() -> String {
    "banned_ips.json".to_string()
}

fn default_database_path() -> String {
    "./jailwatch.db".to_string()
}

fn default_retention_days() -> u32 {
    7
}

fn default_max_connections() -> u32 {
    4
}
