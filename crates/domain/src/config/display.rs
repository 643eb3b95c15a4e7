use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// IANA zone used when formatting times for the dashboard.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// IANA zone the daemon writes its naive ban times in.
    #[serde(default = "default_timezone")]
    pub source_timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            source_timezone: default_timezone(),
        }
    }
}

impl DisplayConfig {
    pub fn display_tz(&self) -> Result<Tz, String> {
        parse_tz(&self.timezone)
    }

    pub fn source_tz(&self) -> Result<Tz, String> {
        parse_tz(&self.source_timezone)
    }
}

fn parse_tz(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>()
        .map_err(|_| format!("unknown timezone '{}'", name))
}

fn default_timezone() -> String {
    "UTC".to_string()
}
