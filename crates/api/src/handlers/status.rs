use crate::dto::StatusResponse;
use crate::state::AppState;
use crate::utils::display::format_instant;
use axum::{extract::State, Json};
use jailwatch_domain::BannedAt;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let (overview, snapshot) = tokio::join!(state.get_status.execute(), state.get_history.execute());

    let hostname = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    debug!(
        running = overview.status.running,
        tracked = snapshot.len(),
        "Status assembled"
    );

    Json(StatusResponse {
        service: overview.status,
        jails: overview.jails,
        jail_stats: snapshot.jail_counts(),
        total_banned: snapshot.len(),
        unique_jails: snapshot.unique_jails(),
        last_updated: snapshot
            .last_updated
            .map(|at| BannedAt::At(at).to_storage_string()),
        last_updated_display: snapshot
            .last_updated
            .map(|at| format_instant(at, state.display_tz)),
        refresh_in_progress: state.reconcile.is_running(),
        last_report: state.reconcile.last_report().await,
        history_backend: state.get_history.backend_name(),
        hostname,
    })
}
