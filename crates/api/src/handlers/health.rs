use crate::dto::{HealthResponse, VersionResponse};
use axum::Json;

const APP_NAME: &str = "Jailwatch Banned IPs Monitor";

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}
