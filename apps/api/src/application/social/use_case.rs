use super::dto::{GalleryItem, RankingEntry};
use crate::domain::{
    like::{entity::LikeCount, repository::LikeRepository},
    record::repository::RecordRepository,
    shared::errors::DomainError,
};
use crate::infrastructure::storage::traits::StorageService;
use std::{path::Path, sync::Arc};

/// Number of entries on the ranking board when the caller does not ask for more.
pub const DEFAULT_RANKING_LIMIT: i64 = 3;

pub struct SocialUseCase {
    likes: Arc<dyn LikeRepository>,
    records: Arc<dyn RecordRepository>,
}

impl SocialUseCase {
    pub fn new(likes: Arc<dyn LikeRepository>, records: Arc<dyn RecordRepository>) -> Self {
        Self { likes, records }
    }

    pub async fn like(&self, image_path: &str) -> Result<LikeCount, DomainError> {
        let image_path = like_key(image_path)?;
        let likes = self.likes.increment(image_path).await?;
        Ok(LikeCount {
            image_path: image_path.to_string(),
            likes,
        })
    }

    pub async fn likes_for(&self, image_path: &str) -> Result<LikeCount, DomainError> {
        let image_path = like_key(image_path)?;
        let likes = self.likes.get(image_path).await?;
        Ok(LikeCount {
            image_path: image_path.to_string(),
            likes,
        })
    }

    /// Every record with its current like count, for the shared gallery.
    pub async fn gallery(&self, storage: &dyn StorageService) -> Result<Vec<GalleryItem>, DomainError> {
        let records = self.records.list_all().await?;
        let mut items = Vec::with_capacity(records.len());

        for record in records {
            let likes = self.likes.get(&record.image_path).await?;
            let image_url = storage.get_url(file_key(&record.image_path));
            items.push(GalleryItem {
                record,
                image_url,
                likes,
            });
        }

        Ok(items)
    }

    /// Most-liked images first. Entries with equal counts keep whatever order
    /// the like store returned them in.
    pub async fn ranking(&self, limit: i64) -> Result<Vec<RankingEntry>, DomainError> {
        let top = self.likes.top(limit).await?;
        let mut entries = Vec::with_capacity(top.len());

        for (position, entry) in top.into_iter().enumerate() {
            let record = self.records.find_by_image_path(&entry.image_path).await?;
            entries.push(RankingEntry {
                rank: position as i64 + 1,
                plant: record.as_ref().map(|r| r.plant.clone()),
                date: record.map(|r| r.date),
                image_path: entry.image_path,
                likes: entry.likes,
            });
        }

        Ok(entries)
    }
}

/// Key the like store is addressed with; surrounding whitespace is ignored.
fn like_key(image_path: &str) -> Result<&str, DomainError> {
    let image_path = image_path.trim();
    if image_path.is_empty() {
        return Err(DomainError::ValidationError("image_path is required".into()));
    }
    Ok(image_path)
}

/// Storage key (file name) of a stored image path.
pub fn file_key(image_path: &str) -> &str {
    Path::new(image_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(image_path)
}
