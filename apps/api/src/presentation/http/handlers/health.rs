use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    uploads: &'static str,
    like_increment_strategy: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("Health check failed: Database unreachable: {}", e);
            "down"
        }
    };

    let uploads_status = match tokio::fs::metadata(&state.config.uploads_dir).await {
        Ok(meta) if meta.is_dir() => "up",
        _ => {
            tracing::error!(
                "Health check failed: uploads directory {} missing",
                state.config.uploads_dir
            );
            "down"
        }
    };

    let healthy = db_status == "up" && uploads_status == "up";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" },
        database: db_status,
        uploads: uploads_status,
        like_increment_strategy: state.like_repo.strategy().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
