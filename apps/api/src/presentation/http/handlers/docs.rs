use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "MyGarden API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/feed": { "get": { "summary": "Three most recent growth records" } },
            "/api/v1/records": {
                "get": { "summary": "Growth records of one user (query: user, default Guest) with posts per day" },
                "post": { "summary": "Record growth (multipart: user, plant, image); ignored without an image" }
            },
            "/api/v1/plants": { "get": { "summary": "Selectable plants and regions" } },
            "/api/v1/guides": { "get": { "summary": "Cultivation guide table" } },
            "/api/v1/guides/{plant}": { "get": { "summary": "Cultivation guide for one plant (query: region)" } },
            "/api/v1/gallery": { "get": { "summary": "All shared photos with like counts" } },
            "/api/v1/likes": {
                "get": { "summary": "Like count for an image (query: image_path)" },
                "post": { "summary": "Like an image (body: image_path)" }
            },
            "/api/v1/ranking": { "get": { "summary": "Most liked images (query: limit, default 3)" } },
            "/api/v1/analytics": { "get": { "summary": "Plant distribution, daily posts and recommendation" } },
            "/uploads/{file}": { "get": { "summary": "Uploaded photo" } },
            "/api/v1/docs": { "get": { "summary": "This document" } }
        }
    }))
}
