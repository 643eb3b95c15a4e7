mod guard;
mod prune_history;
mod reconcile_bans;

pub use guard::ReconcileGuard;
pub use prune_history::PruneHistoryUseCase;
pub use reconcile_bans::{
    ReconcileBansUseCase, ReconcileOutcome, ReconcileReport, DEFAULT_RETENTION_DAYS,
};
