use crate::domain::{
    record::{
        entity::{NewRecord, Record},
        repository::RecordRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

pub struct SqlxRecordRepository {
    pub pool: SqlitePool,
}

impl SqlxRecordRepository {
    /// Creates a new instance of the repository with the provided database pool.
    ///
    /// # Arguments
    /// * `pool` - SQLite connection pool for database operations
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqlxRecordRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for SqlxRecordRepository {
    /// Inserts a growth-log entry.
    ///
    /// No uniqueness is enforced on any column, so the insert succeeds for any
    /// well-formed input. The id comes from SQLite's `AUTOINCREMENT` sequence
    /// and is never handed out twice.
    ///
    /// # Errors
    /// Returns `DomainError::InfrastructureError` if the insert fails
    #[instrument(skip(self, record), fields(user = %record.user, plant = %record.plant))]
    async fn append(&self, record: &NewRecord) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO records (user, plant, date, image_path) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.user)
        .bind(&record.plant)
        .bind(record.date)
        .bind(&record.image_path)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to append record for {}: {}", record.image_path, e);
            DomainError::InfrastructureError(format!("Failed to save record: {}", e))
        })?;

        let id = result.last_insert_rowid();
        info!("Recorded {} for {} as #{}", record.plant, record.user, id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, Record>(
            "SELECT id, user, plant, date, image_path FROM records ORDER BY date DESC LIMIT ?",
        )
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch recent records with limit {}: {}", limit, e);
            DomainError::InfrastructureError(format!("Failed to retrieve records: {}", e))
        })?;

        debug!("Retrieved {} recent records", rows.len());
        Ok(rows)
    }

    async fn list_by_user(&self, user: &str) -> Result<Vec<Record>, DomainError> {
        sqlx::query_as::<_, Record>(
            "SELECT id, user, plant, date, image_path FROM records WHERE user = ?",
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Record>, DomainError> {
        sqlx::query_as::<_, Record>("SELECT id, user, plant, date, image_path FROM records")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn find_by_image_path(&self, image_path: &str) -> Result<Option<Record>, DomainError> {
        sqlx::query_as::<_, Record>(
            "SELECT id, user, plant, date, image_path FROM records WHERE image_path = ? ORDER BY id LIMIT 1",
        )
        .bind(image_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
