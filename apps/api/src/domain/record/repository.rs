use super::entity::{NewRecord, Record};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Appends a record and returns its store-assigned id.
    async fn append(&self, record: &NewRecord) -> Result<i64, DomainError>;
    /// Newest date first; equal dates come back in the store's natural order.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Record>, DomainError>;
    async fn list_by_user(&self, user: &str) -> Result<Vec<Record>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Record>, DomainError>;
    async fn find_by_image_path(&self, image_path: &str) -> Result<Option<Record>, DomainError>;
}
