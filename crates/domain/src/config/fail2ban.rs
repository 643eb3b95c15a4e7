use serde::{Deserialize, Serialize};

/// How the daemon's command-line client is located and invoked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fail2banConfig {
    /// Client executables, tried in order.
    #[serde(default = "default_client_paths")]
    pub client_paths: Vec<String>,

    /// Try `sudo -n <client>` before the plain invocation for every path.
    #[serde(default = "default_true")]
    pub use_sudo: bool,

    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Timeout for the `ping`/`version` status probe.
    #[serde(default = "default_ping_timeout_secs")]
    pub ping_timeout_secs: u64,

    /// `PATH` handed to the child process.
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Jails assumed when the daemon cannot be asked for its jail list.
    #[serde(default = "default_fallback_jails")]
    pub fallback_jails: Vec<String>,

    /// Query `banip --with-time` to recover real ban start times.
    #[serde(default = "default_true")]
    pub query_ban_times: bool,
}

impl Default for Fail2banConfig {
    fn default() -> Self {
        Self {
            client_paths: default_client_paths(),
            use_sudo: true,
            timeout_secs: default_timeout_secs(),
            ping_timeout_secs: default_ping_timeout_secs(),
            search_path: default_search_path(),
            fallback_jails: default_fallback_jails(),
            query_ban_times: true,
        }
    }
}

fn default_client_paths() -> Vec<String> {
    vec![
        "/usr/bin/fail2ban-client".to_string(),
        "fail2ban-client".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_ping_timeout_secs() -> u64 {
    5
}

fn default_search_path() -> String {
    "/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin".to_string()
}

fn default_fallback_jails() -> Vec<String> {
    vec!["sshd".to_string()]
}
