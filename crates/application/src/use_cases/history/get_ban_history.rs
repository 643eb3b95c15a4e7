use crate::ports::HistoryStore;
use jailwatch_domain::HistorySnapshot;
use std::sync::Arc;
use tracing::{error, instrument};

/// Use case: read-only snapshot for the presentation layer.
///
/// A read failure degrades to an empty snapshot so the dashboard still renders.
pub struct GetBanHistoryUseCase {
    store: Arc<dyn HistoryStore>,
}

impl GetBanHistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> HistorySnapshot {
        match self.store.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(error = %e, "Failed to load ban history");
                HistorySnapshot::empty()
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}
