use crate::{
    domain::{
        guide::entity::{CareGuide, Region, all_guides, find_guide},
        record::entity::PlantKind,
    },
    presentation::http::errors::AppError,
};
use axum::{
    Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PlantsResponse {
    pub plants: [PlantKind; 3],
    pub regions: [Region; 3],
}

pub async fn list_plants() -> Json<PlantsResponse> {
    Json(PlantsResponse {
        plants: PlantKind::ALL,
        regions: Region::ALL,
    })
}

#[derive(Debug, Serialize)]
pub struct GuidesResponse {
    pub guides: &'static [CareGuide],
}

pub async fn list_guides() -> Json<GuidesResponse> {
    Json(GuidesResponse {
        guides: all_guides(),
    })
}

#[derive(Debug, Deserialize)]
pub struct GuideQuery {
    region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub guide: &'static CareGuide,
    pub region: Option<Region>,
    pub advisory: Option<&'static str>,
}

/// Guide for one plant. The region only adds an advisory; the guide text
/// is the same everywhere.
pub async fn get_guide(
    Path(plant): Path<String>,
    Query(query): Query<GuideQuery>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide = find_guide(&plant)?;

    let region = query
        .region
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .map(str::parse::<Region>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    Ok(Json(GuideResponse {
        guide,
        advisory: region.and_then(|r| r.advisory()),
        region,
    }))
}
