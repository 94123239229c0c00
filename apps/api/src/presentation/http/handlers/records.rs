use crate::{
    application::{
        analytics::use_case::AnalyticsUseCase,
        record_growth::{
            dto::{RecordGrowthRequest, RecordGrowthResponse, UploadedImage},
            use_case::RecordGrowthUseCase,
        },
        social::use_case::file_key,
    },
    domain::{
        analytics::aggregation::DailyCount,
        record::entity::{PlantKind, normalize_user},
    },
    presentation::http::{errors::AppError, state::AppState, views::RecordView},
};
use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Accepts the growth-log form: `user` (optional), `plant` and `image`.
///
/// A form without a photo is acknowledged with `recorded: false` and
/// nothing is stored.
#[instrument(skip_all)]
pub async fn create_record(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecordGrowthResponse>, AppError> {
    let mut user = None;
    let mut plant = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user" => user = Some(field.text().await?),
            "plant" => plant = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                image = Some(UploadedImage { file_name, data });
            }
            other => debug!("Ignoring unknown form field {}", other),
        }
    }

    // Without a photo the rest of the form is not looked at.
    let Some(image) = image.filter(|img| !img.data.is_empty()) else {
        debug!("Submission without a photo ignored");
        return Ok(Json(RecordGrowthResponse::skipped()));
    };

    let plant: PlantKind = plant
        .ok_or_else(|| AppError::BadRequest("plant is required".into()))?
        .parse()
        .map_err(AppError::BadRequest)?;

    let use_case = RecordGrowthUseCase::new(
        state.record_repo.clone(),
        state.storage.clone(),
        state.config.unique_upload_names,
    );

    let record = use_case
        .execute(RecordGrowthRequest {
            user,
            plant,
            image: Some(image),
        })
        .await?;

    let response = match record {
        Some(record) => {
            info!("Recorded {} for {}", record.plant, record.user);
            RecordGrowthResponse {
                recorded: true,
                image_url: Some(state.storage.get_url(file_key(&record.image_path))),
                record: Some(record),
            }
        }
        None => RecordGrowthResponse::skipped(),
    };

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    user: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub user: String,
    pub records: Vec<RecordView>,
    pub daily_counts: Vec<DailyCount>,
}

/// One user's growth log; the user defaults to `Guest`.
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, AppError> {
    let user = normalize_user(query.user.as_deref());
    let (records, daily_counts) = AnalyticsUseCase::new(state.record_repo.clone())
        .user_timeline(&user)
        .await?;

    Ok(Json(TimelineResponse {
        user,
        records: RecordView::many(records, state.storage.as_ref()),
        daily_counts,
    }))
}
