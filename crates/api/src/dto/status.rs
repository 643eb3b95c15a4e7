use jailwatch_application::use_cases::ReconcileReport;
use jailwatch_domain::{JailCount, SourceStatus};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub service: SourceStatus,
    pub jails: Vec<String>,
    pub jail_stats: Vec<JailCount>,
    pub total_banned: usize,
    pub unique_jails: usize,
    pub last_updated: Option<String>,
    pub last_updated_display: Option<String>,
    pub refresh_in_progress: bool,
    pub last_report: Option<ReconcileReport>,
    pub history_backend: &'static str,
    pub hostname: String,
}

#[derive(Serialize, Debug)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
}
