use crate::{
    config::Config,
    infrastructure::{
        repositories::{
            sqlx_like_repository::SqlxLikeRepository,
            sqlx_record_repository::SqlxRecordRepository,
        },
        storage::traits::StorageService,
    },
};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub storage: Arc<dyn StorageService>,
    pub config: Config,
    pub record_repo: Arc<SqlxRecordRepository>,
    pub like_repo: Arc<SqlxLikeRepository>,
}

impl AppState {
    /// Builds the state around one pool; both repositories share it.
    pub fn new(db: SqlitePool, storage: Arc<dyn StorageService>, config: Config) -> Self {
        Self {
            record_repo: Arc::new(SqlxRecordRepository::new(db.clone())),
            like_repo: Arc::new(SqlxLikeRepository::new(
                db.clone(),
                config.like_increment_strategy,
            )),
            db,
            storage,
            config,
        }
    }
}
