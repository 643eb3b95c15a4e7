use jailwatch_application::use_cases::ReconcileReport;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct RefreshResponse {
    pub success: bool,
    pub message: String,
    pub report: ReconcileReport,
}
