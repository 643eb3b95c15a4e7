use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub enum ApiError {
    /// A reconciliation pass already holds the guard.
    Busy,
    /// The pass aborted; the previous history is still served.
    RefreshFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Busy => (
                StatusCode::CONFLICT,
                "A refresh is already in progress".to_string(),
            ),
            ApiError::RefreshFailed(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason),
        };

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}
