use super::guard::ReconcileGuard;
use super::reconcile_bans::{retention_cutoff, DEFAULT_RETENTION_DAYS};
use crate::ports::HistoryStore;
use chrono::{DateTime, Duration, Utc};
use jailwatch_domain::DomainError;
use std::sync::Arc;
use tracing::info;

/// Use case: drop history older than the retention window without querying
/// the daemon. Shares the reconciliation guard.
pub struct PruneHistoryUseCase {
    store: Arc<dyn HistoryStore>,
    retention_days: u32,
    guard: ReconcileGuard,
}

impl PruneHistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStore>, guard: ReconcileGuard) -> Self {
        Self {
            store,
            retention_days: DEFAULT_RETENTION_DAYS,
            guard,
        }
    }

    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Returns `None` when a reconciliation pass currently holds the guard.
    pub async fn execute(&self) -> Result<Option<u64>, DomainError> {
        self.execute_at(Utc::now()).await
    }

    pub async fn execute_at(&self, now: DateTime<Utc>) -> Result<Option<u64>, DomainError> {
        let Some(_permit) = self.guard.try_acquire() else {
            info!("Reconciliation in progress, skipping history prune");
            return Ok(None);
        };

        let cutoff = retention_cutoff(now, Duration::days(i64::from(self.retention_days)));
        let deleted = self.store.delete_before(cutoff).await?;
        info!(deleted, retention_days = self.retention_days, "Old ban history pruned");
        Ok(Some(deleted))
    }
}
