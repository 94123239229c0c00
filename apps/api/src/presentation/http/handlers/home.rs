use crate::{
    domain::record::{entity::RECENT_FEED_LIMIT, repository::RecordRepository},
    presentation::http::{errors::AppError, state::AppState, views::RecordView},
};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub records: Vec<RecordView>,
}

/// Latest growth records for the home page. Holds at most three entries and
/// may hold fewer.
pub async fn get_feed(State(state): State<AppState>) -> Result<Json<FeedResponse>, AppError> {
    let records = state.record_repo.list_recent(RECENT_FEED_LIMIT).await?;
    Ok(Json(FeedResponse {
        records: RecordView::many(records, state.storage.as_ref()),
    }))
}
