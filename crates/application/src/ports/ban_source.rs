use async_trait::async_trait;
use jailwatch_domain::{RawBanTime, SourceStatus};

/// Read-only view of the intrusion-prevention daemon.
///
/// Every query fails soft: an unreachable daemon yields an empty (or
/// fallback) result rather than an error, and each call is bounded by the
/// adapter's own timeout.
#[async_trait]
pub trait BanSource: Send + Sync {
    /// Probe whether the daemon answers at all.
    async fn status(&self) -> SourceStatus;

    async fn list_jails(&self) -> Vec<String>;

    async fn list_banned(&self, jail: &str) -> Vec<String>;

    /// Banned addresses with their raw, uninterpreted ban-time fields.
    /// An empty result is normal when the daemon cannot annotate times.
    async fn list_banned_with_raw_times(&self, jail: &str) -> Vec<RawBanTime>;
}
