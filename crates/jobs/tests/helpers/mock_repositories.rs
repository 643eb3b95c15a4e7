#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jailwatch_application::ports::{BanSource, HistoryStore};
use jailwatch_domain::{DomainError, HistorySnapshot, RawBanTime, SourceStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ban source with a fixed set of `(jail, ip)` pairs.
pub struct MockBanSource {
    bans: Arc<RwLock<Vec<(String, String)>>>,
    list_calls: Arc<AtomicU64>,
}

impl MockBanSource {
    pub fn new() -> Self {
        Self {
            bans: Arc::new(RwLock::new(Vec::new())),
            list_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn ban(&self, jail: &str, ip: &str) {
        self.bans.write().await.push((jail.to_string(), ip.to_string()));
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BanSource for MockBanSource {
    async fn status(&self) -> SourceStatus {
        SourceStatus::running(None)
    }

    async fn list_jails(&self) -> Vec<String> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        let mut jails: Vec<String> = self.bans.read().await.iter().map(|(j, _)| j.clone()).collect();
        jails.dedup();
        jails
    }

    async fn list_banned(&self, jail: &str) -> Vec<String> {
        self.bans
            .read()
            .await
            .iter()
            .filter(|(j, _)| j == jail)
            .map(|(_, ip)| ip.clone())
            .collect()
    }

    async fn list_banned_with_raw_times(&self, _jail: &str) -> Vec<RawBanTime> {
        Vec::new()
    }
}

pub struct MockHistoryStore {
    snapshot: Arc<RwLock<HistorySnapshot>>,
    save_count: Arc<AtomicU64>,
    delete_calls: Arc<AtomicU64>,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self::with_snapshot(HistorySnapshot::empty())
    }

    pub fn with_snapshot(snapshot: HistorySnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            save_count: Arc::new(AtomicU64::new(0)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        self.snapshot.read().await.clone()
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn load(&self) -> Result<HistorySnapshot, DomainError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), DomainError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.snapshot.write().await = snapshot.clone();
        Ok(())
    }

    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.snapshot.write().await.expire_before(cutoff) as u64)
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
