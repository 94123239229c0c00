use axum::{Json, extract::State};

use crate::{
    application::analytics::use_case::AnalyticsUseCase,
    domain::analytics::aggregation::AnalyticsReport,
    presentation::http::{errors::AppError, state::AppState},
};

pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let report = AnalyticsUseCase::new(state.record_repo.clone())
        .execute()
        .await?;
    Ok(Json(report))
}
