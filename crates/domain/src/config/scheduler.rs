use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_reconcile_interval_secs")]
    pub reconcile_interval_secs: u64,

    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,

    /// Run one pass immediately at startup instead of waiting a full interval.
    #[serde(default = "default_true")]
    pub run_on_startup: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reconcile_interval_secs: default_reconcile_interval_secs(),
            prune_interval_secs: default_prune_interval_secs(),
            run_on_startup: true,
        }
    }
}

fn default_reconcile_interval_secs() -> u64 {
    3600
}

fn default_prune_interval_secs() -> u64 {
    86400
}

fn default_true() -> bool {
    true
}
