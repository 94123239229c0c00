use crate::domain::{
    like::{
        entity::{IncrementStrategy, LikeCount},
        repository::LikeRepository,
    },
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

pub struct SqlxLikeRepository {
    pub pool: SqlitePool,
    strategy: IncrementStrategy,
}

impl SqlxLikeRepository {
    pub fn new(pool: SqlitePool, strategy: IncrementStrategy) -> Self {
        info!("Initializing SqlxLikeRepository ({} increments)", strategy);
        Self { pool, strategy }
    }

    pub fn strategy(&self) -> IncrementStrategy {
        self.strategy
    }

    async fn increment_atomic(&self, image_path: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO likes (image_path, likes) VALUES (?, 1)
             ON CONFLICT(image_path) DO UPDATE SET likes = likes + 1
             RETURNING likes",
        )
        .bind(image_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    // Two statements with no lock held in between: concurrent likes on the
    // same image can both read `n` and both write `n + 1`.
    async fn increment_racy(&self, image_path: &str) -> Result<i64, DomainError> {
        let current = self.get(image_path).await?;
        let next = current + 1;

        sqlx::query("INSERT OR REPLACE INTO likes (image_path, likes) VALUES (?, ?)")
            .bind(image_path)
            .bind(next)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        Ok(next)
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn get(&self, image_path: &str) -> Result<i64, DomainError> {
        let likes = sqlx::query_scalar::<_, i64>("SELECT likes FROM likes WHERE image_path = ?")
            .bind(image_path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(likes.unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn increment(&self, image_path: &str) -> Result<i64, DomainError> {
        let likes = match self.strategy {
            IncrementStrategy::Atomic => self.increment_atomic(image_path).await?,
            IncrementStrategy::Racy => self.increment_racy(image_path).await?,
        };
        debug!("{} now has {} likes ({} increment)", image_path, likes, self.strategy);
        Ok(likes)
    }

    async fn top(&self, n: i64) -> Result<Vec<LikeCount>, DomainError> {
        sqlx::query_as::<_, LikeCount>(
            "SELECT image_path, likes FROM likes ORDER BY likes DESC LIMIT ?",
        )
        .bind(n.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
