use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jailwatch_application::ports::HistoryStore;
use jailwatch_domain::{BanRecord, BannedAt, DomainError, HistorySnapshot};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type BanRow = (String, String, String);

/// History kept in SQLite: one `ban_history` row per key plus the
/// single-row `history_meta` table holding `last_updated`.
///
/// `save` replaces every row inside one transaction.
pub struct SqliteHistoryStore {
    pool: SqlitePool,
}

impl SqliteHistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: BanRow) -> BanRecord {
        let (ip_address, jail, banned_at) = row;
        BanRecord {
            ip_address,
            jail,
            banned_at: BannedAt::parse(&banned_at),
        }
    }
}

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<HistorySnapshot, DomainError> {
        let rows = sqlx::query_as::<_, BanRow>(
            "SELECT ip_address, jail, banned_at FROM ban_history ORDER BY position ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to load ban history"))?;

        let last_updated =
            sqlx::query_scalar::<_, Option<String>>("SELECT last_updated FROM history_meta WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("Failed to load history metadata"))?
                .flatten();

        let last_updated = last_updated.and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring unreadable last_updated");
                None
            }
        });

        Ok(HistorySnapshot::new(
            rows.into_iter().map(Self::row_to_record).collect(),
            last_updated,
        ))
    }

    #[instrument(skip(self, snapshot), fields(records = snapshot.len()))]
    async fn save(&self, snapshot: &HistorySnapshot) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin history transaction"))?;

        sqlx::query("DELETE FROM ban_history")
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to clear ban history"))?;

        for (position, record) in snapshot.records.iter().enumerate() {
            let epoch = record.banned_at.instant().map(|at| at.timestamp_micros());

            // Repeated keys keep their first row.
            sqlx::query(
                "INSERT OR IGNORE INTO ban_history
                     (ip_address, jail, banned_at, banned_at_epoch, position)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&record.ip_address)
            .bind(&record.jail)
            .bind(record.banned_at.to_storage_string())
            .bind(epoch)
            .bind(position as i64)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert ban record"))?;
        }

        let last_updated = snapshot
            .last_updated
            .map(|at| BannedAt::At(at).to_storage_string());

        sqlx::query(
            "INSERT INTO history_meta (id, last_updated) VALUES (1, ?)
             ON CONFLICT(id) DO UPDATE SET last_updated = excluded.last_updated",
        )
        .bind(last_updated)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to update history metadata"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit ban history"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM ban_history
             WHERE banned_at_epoch IS NOT NULL AND banned_at_epoch < ?",
        )
        .bind(cutoff.timestamp_micros())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to prune ban history"))?;

        Ok(result.rows_affected())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
