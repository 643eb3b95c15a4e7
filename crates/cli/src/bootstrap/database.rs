use jailwatch_domain::config::HistoryConfig;
use jailwatch_infrastructure::database::{create_pool, sqlite_url};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &HistoryConfig) -> anyhow::Result<SqlitePool> {
    let database_url = sqlite_url(&cfg.database_path);
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, cfg.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to initialize database pool: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
