use super::guard::ReconcileGuard;
use crate::ports::{BanSource, HistoryStore};
use crate::services::TimestampResolver;
use chrono::{DateTime, Duration, Utc};
use futures::FutureExt;
use jailwatch_domain::{BanRecord, DomainError, RawBanTime};
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// Oldest instant still inside the window. Saturates instead of overflowing
/// for windows reaching before the representable range.
pub(crate) fn retention_cutoff(now: DateTime<Utc>, retention: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(retention).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Figures from one completed reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub finished_at: DateTime<Utc>,
    pub jails: usize,
    pub currently_banned: usize,
    pub added: usize,
    pub expired: usize,
    pub tracked: usize,
    /// False when the merged history could not be written; the figures still
    /// describe what this pass computed.
    pub persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Completed(ReconcileReport),
    /// Another pass (or a prune) held the guard.
    Skipped,
    /// The pass aborted before committing; stored history is unchanged.
    Failed(String),
}

impl ReconcileOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ReconcileOutcome::Completed(_))
    }

    pub fn report(&self) -> Option<&ReconcileReport> {
        match self {
            ReconcileOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }
}

/// Use case: merge the daemon's current bans into the persisted history.
///
/// One pass fetches every jail's bans, resolves their start times, drops
/// history older than the retention window, appends keys not seen before and
/// saves the result. A key already in history keeps its first-seen start time.
///
/// `execute` never returns an error: failures are logged and reported as
/// [`ReconcileOutcome::Failed`], leaving the previous snapshot authoritative.
pub struct ReconcileBansUseCase {
    source: Arc<dyn BanSource>,
    store: Arc<dyn HistoryStore>,
    resolver: TimestampResolver,
    retention: Duration,
    query_ban_times: bool,
    guard: ReconcileGuard,
    last_report: RwLock<Option<ReconcileReport>>,
}

impl ReconcileBansUseCase {
    pub fn new(
        source: Arc<dyn BanSource>,
        store: Arc<dyn HistoryStore>,
        resolver: TimestampResolver,
    ) -> Self {
        Self {
            source,
            store,
            resolver,
            retention: Duration::days(i64::from(DEFAULT_RETENTION_DAYS)),
            query_ban_times: true,
            guard: ReconcileGuard::new(),
            last_report: RwLock::new(None),
        }
    }

    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention = Duration::days(i64::from(days));
        self
    }

    pub fn with_ban_times(mut self, enabled: bool) -> Self {
        self.query_ban_times = enabled;
        self
    }

    pub fn with_guard(mut self, guard: ReconcileGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> &ReconcileGuard {
        &self.guard
    }

    pub fn is_running(&self) -> bool {
        self.guard.is_busy()
    }

    pub async fn last_report(&self) -> Option<ReconcileReport> {
        self.last_report.read().await.clone()
    }

    pub async fn execute(&self) -> ReconcileOutcome {
        self.execute_at(Utc::now()).await
    }

    /// Run one pass treating `now` as the reconciliation instant.
    pub async fn execute_at(&self, now: DateTime<Utc>) -> ReconcileOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            info!("Reconciliation already in progress, skipping this trigger");
            return ReconcileOutcome::Skipped;
        };

        info!(backend = self.store.backend_name(), "Starting ban history reconciliation");

        match AssertUnwindSafe(self.run_pass(now)).catch_unwind().await {
            Ok(Ok(report)) => {
                info!(
                    jails = report.jails,
                    currently_banned = report.currently_banned,
                    added = report.added,
                    expired = report.expired,
                    tracked = report.tracked,
                    persisted = report.persisted,
                    "Ban history reconciled"
                );
                *self.last_report.write().await = Some(report.clone());
                ReconcileOutcome::Completed(report)
            }
            Ok(Err(e)) => {
                error!(error = %e, "Reconciliation aborted, previous history kept");
                ReconcileOutcome::Failed(e.to_string())
            }
            Err(payload) => {
                let e = DomainError::ReconciliationPanicked(panic_message(payload.as_ref()));
                error!(error = %e, "Reconciliation aborted, previous history kept");
                ReconcileOutcome::Failed(e.to_string())
            }
        }
    }

    async fn run_pass(&self, now: DateTime<Utc>) -> Result<ReconcileReport, DomainError> {
        let (jails, observed) = self.observe(now).await;
        let currently_banned = observed.len();

        let mut snapshot = self.store.load().await?;

        let duplicates = snapshot.dedupe();
        if duplicates > 0 {
            warn!(duplicates, "Stored history contained repeated keys, kept first occurrence");
        }

        let expired = snapshot.expire_before(retention_cutoff(now, self.retention));

        let mut known = snapshot.keys();
        let mut added = 0usize;
        for record in observed {
            if known.insert(record.key()) {
                debug!(ip = %record.ip_address, jail = %record.jail, "New ban recorded");
                snapshot.records.push(record);
                added += 1;
            }
        }

        snapshot.last_updated = Some(now);

        let persisted = match self.store.save(&snapshot).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to persist ban history, result kept in memory only");
                false
            }
        };

        Ok(ReconcileReport {
            finished_at: now,
            jails,
            currently_banned,
            added,
            expired,
            tracked: snapshot.len(),
            persisted,
        })
    }

    /// Current observation set: one record per reported (ip, jail) pair.
    async fn observe(&self, now: DateTime<Utc>) -> (usize, Vec<BanRecord>) {
        let jails = self.source.list_jails().await;
        if jails.is_empty() {
            warn!("Ban source reported no jails, treating as zero active bans");
        }

        let mut observed = Vec::new();
        for jail in &jails {
            let banned = self.source.list_banned(jail).await;

            let wants_times = self.query_ban_times && !banned.is_empty();
            let raw_times: HashMap<String, RawBanTime> = if wants_times {
                self.source
                    .list_banned_with_raw_times(jail)
                    .await
                    .into_iter()
                    .map(|raw| (raw.ip_address.clone(), raw))
                    .collect()
            } else {
                HashMap::new()
            };

            debug!(
                jail = %jail,
                banned = banned.len(),
                with_times = raw_times.len(),
                "Jail queried"
            );

            for ip in banned {
                let banned_at = match raw_times.get(&ip) {
                    Some(raw) => self.resolver.resolve(&raw.primary, &raw.secondary, now),
                    None => now,
                };
                observed.push(BanRecord::new(ip, jail.clone(), banned_at));
            }
        }

        (jails.len(), observed)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
