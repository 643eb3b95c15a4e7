#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jailwatch_application::ports::{BanSource, HistoryStore};
use jailwatch_domain::{DomainError, HistorySnapshot, RawBanTime, SourceStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub struct MockBanSource {
    jails: Arc<RwLock<Vec<String>>>,
    banned: Arc<RwLock<HashMap<String, Vec<String>>>>,
    raw_times: Arc<RwLock<HashMap<String, Vec<RawBanTime>>>>,
    running: Arc<AtomicBool>,
    panic_on_list: Arc<AtomicBool>,
    delay: Arc<RwLock<Option<Duration>>>,
    jail_calls: Arc<AtomicU64>,
    raw_time_calls: Arc<AtomicU64>,
}

impl MockBanSource {
    pub fn new() -> Self {
        Self {
            jails: Arc::new(RwLock::new(Vec::new())),
            banned: Arc::new(RwLock::new(HashMap::new())),
            raw_times: Arc::new(RwLock::new(HashMap::new())),
            running: Arc::new(AtomicBool::new(true)),
            panic_on_list: Arc::new(AtomicBool::new(false)),
            delay: Arc::new(RwLock::new(None)),
            jail_calls: Arc::new(AtomicU64::new(0)),
            raw_time_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn with_bans(entries: Vec<(&str, &str)>) -> Self {
        let source = Self::new();
        for (jail, ip) in entries {
            source.ban(jail, ip).await;
        }
        source
    }

    pub async fn ban(&self, jail: &str, ip: &str) {
        {
            let mut jails = self.jails.write().await;
            if !jails.iter().any(|j| j == jail) {
                jails.push(jail.to_string());
            }
        }
        self.banned
            .write()
            .await
            .entry(jail.to_string())
            .or_default()
            .push(ip.to_string());
    }

    pub async fn unban(&self, jail: &str, ip: &str) {
        if let Some(ips) = self.banned.write().await.get_mut(jail) {
            ips.retain(|i| i != ip);
        }
    }

    pub async fn set_raw_time(&self, jail: &str, ip: &str, primary: &str, secondary: &str) {
        self.raw_times
            .write()
            .await
            .entry(jail.to_string())
            .or_default()
            .push(RawBanTime::new(ip, primary, secondary));
    }

    pub async fn clear_jails(&self) {
        self.jails.write().await.clear();
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Relaxed);
    }

    pub fn set_panic_on_list(&self, panic: bool) {
        self.panic_on_list.store(panic, Ordering::Relaxed);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn jail_calls(&self) -> u64 {
        self.jail_calls.load(Ordering::Relaxed)
    }

    pub fn raw_time_calls(&self) -> u64 {
        self.raw_time_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BanSource for MockBanSource {
    async fn status(&self) -> SourceStatus {
        if self.running.load(Ordering::Relaxed) {
            SourceStatus::running(Some("Fail2Ban v1.0.2".to_string()))
        } else {
            SourceStatus::unreachable("fail2ban-client not found")
        }
    }

    async fn list_jails(&self) -> Vec<String> {
        self.jail_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        self.jails.read().await.clone()
    }

    async fn list_banned(&self, jail: &str) -> Vec<String> {
        if self.panic_on_list.load(Ordering::Relaxed) {
            panic!("daemon output exploded");
        }
        self.banned.read().await.get(jail).cloned().unwrap_or_default()
    }

    async fn list_banned_with_raw_times(&self, jail: &str) -> Vec<RawBanTime> {
        self.raw_time_calls.fetch_add(1, Ordering::Relaxed);
        self.raw_times
            .read()
            .await
            .get(jail)
            .cloned()
            .unwrap_or_default()
    }
}

pub struct MockHistoryStore {
    snapshot: Arc<RwLock<HistorySnapshot>>,
    fail_load: Arc<AtomicBool>,
    fail_save: Arc<AtomicBool>,
    save_count: Arc<AtomicU64>,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self::with_snapshot(HistorySnapshot::empty())
    }

    pub fn with_snapshot(snapshot: HistorySnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            fail_load: Arc::new(AtomicBool::new(false)),
            fail_save: Arc::new(AtomicBool::new(false)),
            save_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        self.snapshot.read().await.clone()
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::Relaxed);
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn load(&self) -> Result<HistorySnapshot, DomainError> {
        if self.fail_load.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), DomainError> {
        if self.fail_save.load(Ordering::Relaxed) {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.snapshot.write().await = snapshot.clone();
        Ok(())
    }

    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut snapshot = self.snapshot.write().await;
        Ok(snapshot.expire_before(cutoff) as u64)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
