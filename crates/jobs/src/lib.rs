pub mod history_prune;
pub mod reconciliation;
pub mod runner;

pub use history_prune::HistoryPruneJob;
pub use reconciliation::ReconciliationJob;
pub use runner::JobRunner;
