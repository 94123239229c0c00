use crate::domain::record::entity::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct LikeRequest {
    #[validate(length(min = 1, max = 512))]
    pub image_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GalleryItem {
    #[serde(flatten)]
    pub record: Record,
    pub image_url: String,
    pub likes: i64,
}

/// One row of the like ranking.
///
/// `plant` and `date` come from the record that owns the image and are `None`
/// when no such record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankingEntry {
    pub rank: i64,
    pub image_path: String,
    pub likes: i64,
    pub plant: Option<String>,
    pub date: Option<NaiveDate>,
}
