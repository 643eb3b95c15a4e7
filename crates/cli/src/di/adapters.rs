use crate::bootstrap;
use jailwatch_application::ports::{BanSource, HistoryStore};
use jailwatch_domain::{Config, HistoryBackend};
use jailwatch_infrastructure::fail2ban::Fail2banClient;
use jailwatch_infrastructure::history::{JsonFileHistoryStore, SqliteHistoryStore};
use std::sync::Arc;
use tracing::info;

pub struct Adapters {
    pub ban_source: Arc<dyn BanSource>,
    pub history_store: Arc<dyn HistoryStore>,
}

impl Adapters {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let ban_source: Arc<dyn BanSource> = Arc::new(Fail2banClient::from_config(&config.fail2ban));

        let history_store: Arc<dyn HistoryStore> = match config.history.backend {
            HistoryBackend::Json => {
                info!(path = %config.history.json_path, "Using JSON history file");
                Arc::new(JsonFileHistoryStore::new(&config.history.json_path))
            }
            HistoryBackend::Sqlite => {
                let pool = bootstrap::init_database(&config.history).await?;
                Arc::new(SqliteHistoryStore::new(pool))
            }
        };

        Ok(Self {
            ban_source,
            history_store,
        })
    }
}
