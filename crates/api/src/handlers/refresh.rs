use crate::dto::RefreshResponse;
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use jailwatch_application::use_cases::ReconcileOutcome;
use tracing::{error, info, instrument, warn};

/// Runs one reconciliation pass synchronously and reports its figures.
#[instrument(skip(state), name = "api_refresh")]
pub async fn refresh_bans(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    info!("Manual refresh requested");

    // Spawned so a dropped request cannot cancel the pass halfway.
    let reconcile = state.reconcile.clone();
    let outcome = tokio::spawn(async move { reconcile.execute().await })
        .await
        .map_err(|e| {
            error!(error = %e, "Manual refresh task did not complete");
            ApiError::RefreshFailed(e.to_string())
        })?;

    match outcome {
        ReconcileOutcome::Completed(report) => Ok(Json(RefreshResponse {
            success: true,
            message: "IP list refreshed successfully".to_string(),
            report,
        })),
        ReconcileOutcome::Skipped => {
            warn!("Manual refresh rejected, a pass is already running");
            Err(ApiError::Busy)
        }
        ReconcileOutcome::Failed(reason) => Err(ApiError::RefreshFailed(reason)),
    }
}
