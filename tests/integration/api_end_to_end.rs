#![cfg(unix)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jailwatch_api::{create_api_routes, AppState};
use jailwatch_application::services::TimestampResolver;
use jailwatch_application::use_cases::{
    GetBanHistoryUseCase, GetServiceStatusUseCase, ReconcileBansUseCase,
};
use jailwatch_infrastructure::history::JsonFileHistoryStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

mod common;
use common::ScriptedDaemon;

fn build_app(daemon: &ScriptedDaemon, dir: &TempDir) -> Router {
    let source = Arc::new(daemon.client());
    let store = Arc::new(JsonFileHistoryStore::new(dir.path().join("banned_ips.json")));

    create_api_routes(AppState {
        get_history: Arc::new(GetBanHistoryUseCase::new(store.clone())),
        get_status: Arc::new(GetServiceStatusUseCase::new(source.clone())),
        reconcile: Arc::new(ReconcileBansUseCase::new(
            source,
            store,
            TimestampResolver::utc(),
        )),
        display_tz: chrono_tz::UTC,
    })
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_refresh_then_list_through_real_adapters() {
    let daemon = ScriptedDaemon::start();
    let dir = TempDir::new().unwrap();
    let app = build_app(&daemon, &dir);
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    daemon.ban("sshd", "10.0.0.5", &today, "00:00:01");

    let (status, json) = call(&app, "GET", "/banned-ips").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);

    let (status, json) = call(&app, "POST", "/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["added"], 1);

    let (_, json) = call(&app, "GET", "/banned-ips").await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["ip_address"], "10.0.0.5");
    assert_eq!(json["data"][0]["jail"], "sshd");
    assert!(json["data"][0]["banned_at"]
        .as_str()
        .unwrap()
        .starts_with(&today));

    assert!(dir.path().join("banned_ips.json").exists());
}

#[tokio::test]
async fn test_status_through_real_client() {
    let daemon = ScriptedDaemon::start();
    let dir = TempDir::new().unwrap();
    let app = build_app(&daemon, &dir);
    daemon.ban("sshd", "10.0.0.5", "2024-03-01", "10:00:00");
    daemon.ban("recidive", "10.0.0.6", "2024-03-01", "10:00:00");

    let (status, json) = call(&app, "GET", "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"]["running"], true);
    assert_eq!(json["service"]["version"], "1.0.2");
    assert_eq!(json["jails"], serde_json::json!(["recidive", "sshd"]));
    assert_eq!(json["history_backend"], "json");
}
