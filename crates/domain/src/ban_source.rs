use serde::Serialize;

/// A ban as reported by the daemon's time-annotated listing, before the
/// timestamp fields have been interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBanTime {
    pub ip_address: String,
    pub primary: String,
    pub secondary: String,
}

impl RawBanTime {
    pub fn new(
        ip_address: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            ip_address: ip_address.into(),
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Reachability of the intrusion-prevention daemon.
///
/// Lets the dashboard tell "daemon down" apart from "daemon up, nothing banned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub running: bool,
    pub version: Option<String>,
    pub message: String,
}

impl SourceStatus {
    pub fn running(version: Option<String>) -> Self {
        Self {
            running: true,
            version,
            message: "Fail2ban service is running".to_string(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            running: false,
            version: None,
            message: message.into(),
        }
    }
}
