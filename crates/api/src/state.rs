use chrono_tz::Tz;
use jailwatch_application::use_cases::{
    GetBanHistoryUseCase, GetServiceStatusUseCase, ReconcileBansUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_history: Arc<GetBanHistoryUseCase>,
    pub get_status: Arc<GetServiceStatusUseCase>,
    pub reconcile: Arc<ReconcileBansUseCase>,
    /// Zone used for every human-readable timestamp in responses.
    pub display_tz: Tz,
}
