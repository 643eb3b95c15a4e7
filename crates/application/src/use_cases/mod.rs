pub mod history;
pub mod reconciliation;
pub mod status;

// Re-export use cases
pub use history::GetBanHistoryUseCase;
pub use reconciliation::{
    PruneHistoryUseCase, ReconcileBansUseCase, ReconcileGuard, ReconcileOutcome,
    ReconcileReport, DEFAULT_RETENTION_DAYS,
};
pub use status::{GetServiceStatusUseCase, ServiceOverview};
