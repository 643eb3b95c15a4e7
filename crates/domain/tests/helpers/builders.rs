#![allow(dead_code)]
use chrono::{DateTime, Utc};
use jailwatch_domain::{BanRecord, BannedAt};

pub struct RecordBuilder {
    ip_address: String,
    jail: String,
    banned_at: BannedAt,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            ip_address: "192.0.2.10".to_string(),
            jail: "sshd".to_string(),
            banned_at: BannedAt::At(Utc::now()),
        }
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.ip_address = ip.to_string();
        self
    }

    pub fn jail(mut self, jail: &str) -> Self {
        self.jail = jail.to_string();
        self
    }

    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.banned_at = BannedAt::At(at);
        self
    }

    pub fn unparsed(mut self, raw: &str) -> Self {
        self.banned_at = BannedAt::Unparsed(raw.to_string());
        self
    }

    pub fn build(self) -> BanRecord {
        BanRecord {
            ip_address: self.ip_address,
            jail: self.jail,
            banned_at: self.banned_at,
        }
    }
}
