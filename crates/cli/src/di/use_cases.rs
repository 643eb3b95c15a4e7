use super::Adapters;
use chrono_tz::Tz;
use jailwatch_application::services::TimestampResolver;
use jailwatch_application::use_cases::{
    GetBanHistoryUseCase, GetServiceStatusUseCase, PruneHistoryUseCase, ReconcileBansUseCase,
    ReconcileGuard,
};
use jailwatch_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub reconcile: Arc<ReconcileBansUseCase>,
    pub prune_history: Arc<PruneHistoryUseCase>,
    pub get_history: Arc<GetBanHistoryUseCase>,
    pub get_status: Arc<GetServiceStatusUseCase>,
    pub display_tz: Tz,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> anyhow::Result<Self> {
        let source_tz = config.display.source_tz().map_err(anyhow::Error::msg)?;
        let display_tz = config.display.display_tz().map_err(anyhow::Error::msg)?;
        let retention_days = config.history.retention_days;

        // Reconciliation and pruning never touch the store at the same time.
        let guard = ReconcileGuard::new();

        Ok(Self {
            reconcile: Arc::new(
                ReconcileBansUseCase::new(
                    adapters.ban_source.clone(),
                    adapters.history_store.clone(),
                    TimestampResolver::new(source_tz),
                )
                .with_retention_days(retention_days)
                .with_ban_times(config.fail2ban.query_ban_times)
                .with_guard(guard.clone()),
            ),
            prune_history: Arc::new(
                PruneHistoryUseCase::new(adapters.history_store.clone(), guard)
                    .with_retention_days(retention_days),
            ),
            get_history: Arc::new(GetBanHistoryUseCase::new(adapters.history_store.clone())),
            get_status: Arc::new(GetServiceStatusUseCase::new(adapters.ban_source.clone())),
            display_tz,
        })
    }
}
