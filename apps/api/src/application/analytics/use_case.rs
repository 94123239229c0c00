use crate::domain::{
    analytics::aggregation::{AnalyticsReport, DailyCount, daily_frequency},
    record::{entity::Record, repository::RecordRepository},
    shared::errors::DomainError,
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct AnalyticsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl AnalyticsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Distribution, posting frequency and recommendation over every record.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<AnalyticsReport, DomainError> {
        let records = self.repository.list_all().await?;
        debug!("Aggregating {} records", records.len());
        Ok(AnalyticsReport::from_records(&records))
    }

    /// One user's records together with their per-day posting counts.
    pub async fn user_timeline(
        &self,
        user: &str,
    ) -> Result<(Vec<Record>, Vec<DailyCount>), DomainError> {
        let records = self.repository.list_by_user(user).await?;
        let daily = daily_frequency(&records);
        Ok((records, daily))
    }
}
