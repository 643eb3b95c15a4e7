use crate::ban_record::{BanKey, BanRecord, BannedAt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Full ban history at a point in time.
///
/// Serialized as `{ "ips": [...], "last_updated": "<ISO-8601>" | null }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(rename = "ips", default)]
    pub records: Vec<BanRecord>,

    #[serde(default, deserialize_with = "lenient_instant")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Number of tracked records per jail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JailCount {
    pub jail: String,
    pub count: usize,
}

impl HistorySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(records: Vec<BanRecord>, last_updated: Option<DateTime<Utc>>) -> Self {
        Self {
            records,
            last_updated,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> HashSet<BanKey> {
        self.records.iter().map(BanRecord::key).collect()
    }

    /// Drops records whose ban started strictly before `cutoff` and returns
    /// how many were removed. Records with an unparsed start are kept.
    pub fn expire_before(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.banned_at.is_before(cutoff));
        before - self.records.len()
    }

    /// Collapses repeated `(ip, jail)` keys, keeping the first occurrence.
    pub fn dedupe(&mut self) -> usize {
        let before = self.records.len();
        let mut seen = HashSet::with_capacity(before);
        self.records.retain(|r| seen.insert(r.key()));
        before - self.records.len()
    }

    pub fn jail_counts(&self) -> Vec<JailCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.jail.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(jail, count)| JailCount {
                jail: jail.to_string(),
                count,
            })
            .collect()
    }

    pub fn unique_jails(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.jail.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn for_jail(&self, jail: &str) -> Vec<BanRecord> {
        self.records
            .iter()
            .filter(|r| r.jail == jail)
            .cloned()
            .collect()
    }
}

fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => BannedAt::parse(&raw).instant(),
        _ => None,
    })
}
