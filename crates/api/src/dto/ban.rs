use crate::utils::display::format_banned_at;
use chrono_tz::Tz;
use jailwatch_domain::BanRecord;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct BanRecordDto {
    pub ip_address: String,
    pub jail: String,
    pub banned_at: String,
    pub banned_at_display: String,
    pub abuse_url: String,
}

impl BanRecordDto {
    pub fn from_record(record: &BanRecord, tz: Tz) -> Self {
        Self {
            ip_address: record.ip_address.clone(),
            jail: record.jail.clone(),
            banned_at: record.banned_at.to_storage_string(),
            banned_at_display: format_banned_at(&record.banned_at, tz),
            abuse_url: record.abuse_url(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct BannedIpsResponse {
    pub success: bool,
    pub data: Vec<BanRecordDto>,
    pub total: usize,
    pub last_updated: Option<String>,
    pub last_updated_display: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct BannedIpsQuery {
    #[serde(default)]
    pub jail: Option<String>,
}
