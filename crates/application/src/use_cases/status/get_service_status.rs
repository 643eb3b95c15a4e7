use crate::ports::BanSource;
use jailwatch_domain::SourceStatus;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOverview {
    pub status: SourceStatus,
    pub jails: Vec<String>,
}

/// Use case: daemon health plus its active jails, for the dashboard header.
pub struct GetServiceStatusUseCase {
    source: Arc<dyn BanSource>,
}

impl GetServiceStatusUseCase {
    pub fn new(source: Arc<dyn BanSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> ServiceOverview {
        let status = self.source.status().await;

        // Unreachable daemon: don't spend another timeout on the jail list.
        let jails = if status.running {
            self.source.list_jails().await
        } else {
            Vec::new()
        };

        debug!(running = status.running, jails = jails.len(), "Service status probed");
        ServiceOverview { status, jails }
    }
}
