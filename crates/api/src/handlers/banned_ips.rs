use crate::dto::{BanRecordDto, BannedIpsQuery, BannedIpsResponse};
use crate::state::AppState;
use crate::utils::display::format_instant;
use axum::{
    extract::{Query, State},
    Json,
};
use jailwatch_domain::BannedAt;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_banned_ips")]
pub async fn get_banned_ips(
    State(state): State<AppState>,
    Query(params): Query<BannedIpsQuery>,
) -> Json<BannedIpsResponse> {
    let snapshot = state.get_history.execute().await;

    let records = match params.jail.as_deref().filter(|j| !j.is_empty()) {
        Some(jail) => snapshot.for_jail(jail),
        None => snapshot.records.clone(),
    };

    let data: Vec<BanRecordDto> = records
        .iter()
        .map(|r| BanRecordDto::from_record(r, state.display_tz))
        .collect();

    debug!(count = data.len(), jail = ?params.jail, "Banned IPs retrieved");

    Json(BannedIpsResponse {
        success: true,
        total: data.len(),
        data,
        last_updated: snapshot
            .last_updated
            .map(|at| BannedAt::At(at).to_storage_string()),
        last_updated_display: snapshot
            .last_updated
            .map(|at| format_instant(at, state.display_tz)),
    })
}
