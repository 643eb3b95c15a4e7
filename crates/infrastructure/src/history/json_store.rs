use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jailwatch_application::ports::HistoryStore;
use jailwatch_domain::{DomainError, HistorySnapshot};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument, warn};

/// History kept in a single JSON document:
///
/// ```json
/// { "ips": [ { "ip_address": "...", "jail": "...", "banned_at": "..." } ],
///   "last_updated": "2024-03-01T12:00:00Z" }
/// ```
///
/// Saves write a sibling temp file and rename it over the target, so readers
/// only ever see a complete document.
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<HistorySnapshot, DomainError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No history file yet, starting empty");
                return Ok(HistorySnapshot::empty());
            }
            Err(e) => {
                warn!(error = %e, "History file unreadable, starting empty");
                return Ok(HistorySnapshot::empty());
            }
        };

        match serde_json::from_slice::<HistorySnapshot>(&bytes) {
            Ok(snapshot) => {
                debug!(records = snapshot.len(), "History loaded");
                Ok(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "History file is corrupt, starting empty");
                Ok(HistorySnapshot::empty())
            }
        }
    }

    #[instrument(skip(self, snapshot), fields(path = %self.path.display(), records = snapshot.len()))]
    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), DomainError> {
        let body = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &body)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", temp_path.display(), e)))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        debug!("History saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut snapshot = self.load().await?;
        let removed = snapshot.expire_before(cutoff);
        if removed > 0 {
            self.save(&snapshot).await?;
        }
        Ok(removed as u64)
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}
