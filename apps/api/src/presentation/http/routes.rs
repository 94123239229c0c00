use super::{
    handlers::{analytics, docs, gallery, guides, health, home, records, social},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub fn create_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);
    let uploads_path = state.config.uploads_public_path.clone();

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Home
        .route("/api/v1/feed", get(home::get_feed))
        // Growth log
        .route(
            "/api/v1/records",
            get(records::list_records).post(records::create_record),
        )
        // Cultivation guide
        .route("/api/v1/plants", get(guides::list_plants))
        .route("/api/v1/guides", get(guides::list_guides))
        .route("/api/v1/guides/{plant}", get(guides::get_guide))
        // Share / contest
        .route("/api/v1/gallery", get(gallery::get_gallery))
        .route(
            "/api/v1/likes",
            get(social::get_likes).post(social::like_image),
        )
        .route("/api/v1/ranking", get(social::get_ranking))
        // Analytics
        .route("/api/v1/analytics", get(analytics::get_analytics))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        // Uploaded photos
        .nest_service(&uploads_path, uploads)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Router wrapped in the body limit, CORS and security header layers.
pub fn create_app(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    let cors = cors_layer(&state.config.allowed_origins);

    create_router(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

/// Any origin when none are configured, otherwise only the listed ones.
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
