use crate::{
    application::social::{dto::GalleryItem, use_case::SocialUseCase},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub items: Vec<GalleryItem>,
}

/// Every shared photo with its like count.
#[instrument(skip(state))]
pub async fn get_gallery(State(state): State<AppState>) -> Result<Json<GalleryResponse>, AppError> {
    let start = Instant::now();
    let use_case = SocialUseCase::new(state.like_repo.clone(), state.record_repo.clone());
    let items = use_case.gallery(state.storage.as_ref()).await?;

    debug!(
        "Gallery built with {} items in {:?}",
        items.len(),
        start.elapsed()
    );
    Ok(Json(GalleryResponse { items }))
}
