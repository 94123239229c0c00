use super::entity::LikeCount;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Current count, 0 when the image was never liked.
    async fn get(&self, image_path: &str) -> Result<i64, DomainError>;
    /// Adds one like and returns the new count.
    async fn increment(&self, image_path: &str) -> Result<i64, DomainError>;
    /// Highest counts first, at most `n` entries. Equal counts have no defined order.
    async fn top(&self, n: i64) -> Result<Vec<LikeCount>, DomainError>;
}
