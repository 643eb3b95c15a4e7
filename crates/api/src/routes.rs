use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/version", get(handlers::get_version))
        .route("/status", get(handlers::get_status))
        .route("/banned-ips", get(handlers::get_banned_ips))
        .route(
            "/refresh",
            get(handlers::refresh_bans).post(handlers::refresh_bans),
        )
        .with_state(state)
}
