use crate::{
    application::social::{
        dto::{LikeRequest, RankingEntry},
        use_case::{DEFAULT_RANKING_LIMIT, SocialUseCase},
    },
    domain::like::entity::LikeCount,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn social_use_case(state: &AppState) -> SocialUseCase {
    SocialUseCase::new(state.like_repo.clone(), state.record_repo.clone())
}

pub async fn like_image(
    State(state): State<AppState>,
    Json(payload): Json<LikeRequest>,
) -> Result<Json<LikeCount>, AppError> {
    payload.validate()?;
    let count = social_use_case(&state).like(&payload.image_path).await?;
    tracing::info!("{} now has {} likes", count.image_path, count.likes);
    Ok(Json(count))
}

#[derive(Debug, Deserialize)]
pub struct LikesQuery {
    image_path: String,
}

/// Zero for an image that was never liked.
pub async fn get_likes(
    State(state): State<AppState>,
    Query(query): Query<LikesQuery>,
) -> Result<Json<LikeCount>, AppError> {
    let count = social_use_case(&state).likes_for(&query.image_path).await?;
    Ok(Json(count))
}

fn default_ranking_limit() -> i64 {
    DEFAULT_RANKING_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
pub struct RankingQuery {
    #[serde(default = "default_ranking_limit")]
    #[validate(range(min = 1, max = 50))]
    limit: i64,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub ranking: Vec<RankingEntry>,
}

pub async fn get_ranking(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<RankingResponse>, AppError> {
    query.validate()?;
    let ranking = social_use_case(&state).ranking(query.limit).await?;
    Ok(Json(RankingResponse { ranking }))
}
