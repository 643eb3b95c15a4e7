use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jailwatch_domain::{DomainError, HistorySnapshot};

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Current snapshot. Missing or corrupt state loads as an empty snapshot;
    /// only a failure to reach the backend itself is an error.
    async fn load(&self) -> Result<HistorySnapshot, DomainError>;

    /// Atomically replace the stored snapshot.
    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), DomainError>;

    /// Remove records whose ban started strictly before `cutoff`.
    /// Records with an unparsed start time are kept.
    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    fn backend_name(&self) -> &'static str;
}
