use crate::domain::record::entity::{PlantKind, Record};
use bytes::Bytes;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct RecordGrowthRequest {
    pub user: Option<String>,
    pub plant: PlantKind,
    /// `None` when the form was submitted without a photo.
    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RecordGrowthResponse {
    pub recorded: bool,
    pub record: Option<Record>,
    pub image_url: Option<String>,
}

impl RecordGrowthResponse {
    /// Reply for a submission that carried no photo.
    pub fn skipped() -> Self {
        Self {
            recorded: false,
            record: None,
            image_url: None,
        }
    }
}
