use crate::{
    application::social::use_case::file_key, domain::record::entity::Record,
    infrastructure::storage::traits::StorageService,
};
use serde::Serialize;
use ts_rs::TS;

/// A record as returned to the front end, with the URL its photo is served at.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: Record,
    pub image_url: String,
}

impl RecordView {
    pub fn new(record: Record, storage: &dyn StorageService) -> Self {
        let image_url = storage.get_url(file_key(&record.image_path));
        Self { record, image_url }
    }

    pub fn many(records: Vec<Record>, storage: &dyn StorageService) -> Vec<Self> {
        records
            .into_iter()
            .map(|record| Self::new(record, storage))
            .collect()
    }
}
