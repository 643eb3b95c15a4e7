use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Single-slot lock around every mutation of the history store.
///
/// Scheduled passes, manual refreshes and pruning share one guard; whoever
/// finds it taken skips instead of queueing, so merge-then-save sequences
/// never interleave.
#[derive(Debug, Clone, Default)]
pub struct ReconcileGuard {
    slot: Arc<Mutex<()>>,
}

impl ReconcileGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<OwnedMutexGuard<()>> {
        Arc::clone(&self.slot).try_lock_owned().ok()
    }

    pub fn is_busy(&self) -> bool {
        self.slot.try_lock().is_err()
    }
}
