use jailwatch_application::use_cases::{ReconcileBansUseCase, ReconcileOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Periodic reconciliation of daemon bans into history.
pub struct ReconciliationJob {
    reconcile: Arc<ReconcileBansUseCase>,
    interval_secs: u64,
    run_on_startup: bool,
    shutdown: CancellationToken,
}

impl ReconciliationJob {
    pub fn new(reconcile: Arc<ReconcileBansUseCase>) -> Self {
        Self {
            reconcile,
            interval_secs: DEFAULT_INTERVAL_SECS,
            run_on_startup: true,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_run_on_startup(mut self, run_on_startup: bool) -> Self {
        self.run_on_startup = run_on_startup;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            run_on_startup = self.run_on_startup,
            "Starting ban reconciliation job"
        );

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs.max(1));
            let first_tick = if self.run_on_startup {
                Instant::now()
            } else {
                Instant::now() + period
            };
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ReconciliationJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reconcile.execute().await {
                            ReconcileOutcome::Completed(_) => {}
                            ReconcileOutcome::Skipped => {
                                info!("Scheduled reconciliation skipped, another pass is running");
                            }
                            ReconcileOutcome::Failed(e) => {
                                warn!(error = %e, "Scheduled reconciliation failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
