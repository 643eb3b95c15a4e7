use jailwatch_application::use_cases::PruneHistoryUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that drops history past the retention window.
pub struct HistoryPruneJob {
    prune: Arc<PruneHistoryUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HistoryPruneJob {
    pub fn new(prune: Arc<PruneHistoryUseCase>) -> Self {
        Self {
            prune,
            interval_secs: 86400, // Once per day
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting history prune job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs.max(1));
            // First prune one period after startup; reconciliation expires on its own.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HistoryPruneJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.prune.execute().await {
                            Ok(Some(deleted)) => {
                                info!(deleted, "History prune completed");
                            }
                            Ok(None) => {}
                            Err(e) => {
                                error!(error = %e, "History prune failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
