use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mygarden_api::{
    config::Config,
    domain::like::entity::IncrementStrategy,
    infrastructure::{
        database::pool::create_pool, storage::local_storage_service::LocalStorageService,
    },
    presentation::http::{routes::create_app, state::AppState},
};
use serde::de::DeserializeOwned;
use std::{io::Cursor, path::PathBuf, sync::Arc};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub app: Router,
    pub uploads_dir: PathBuf,
    // Dropping the directory deletes the database and uploads.
    _workspace: TempDir,
}

fn build_config(workspace: &TempDir, strategy: IncrementStrategy) -> Config {
    let database_path = workspace.path().join("plants.db");
    let uploads_dir = workspace.path().join("uploads");

    Config {
        database_url: format!("sqlite://{}", database_path.display()),
        database_max_connections: 5,
        uploads_dir: uploads_dir.display().to_string(),
        uploads_public_path: "/uploads".to_string(),
        unique_upload_names: true,
        like_increment_strategy: strategy,
        max_upload_bytes: 2 * 1024 * 1024,
        allowed_origins: Vec::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        ignore_missing_migrations: true,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(IncrementStrategy::Atomic).await
}

pub async fn spawn_app_with(strategy: IncrementStrategy) -> TestApp {
    let workspace = tempfile::tempdir().expect("failed to create temp dir");
    let config = build_config(&workspace, strategy);

    let db = create_pool(&config.database_url, config.database_max_connections)
        .await
        .expect("failed to create pool");
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await.expect("migrations failed");

    let storage = LocalStorageService::new(&config.uploads_dir, &config.uploads_public_path);
    storage
        .initialize()
        .await
        .expect("failed to create uploads dir");

    let uploads_dir = PathBuf::from(&config.uploads_dir);
    let state = AppState::new(db, Arc::new(storage), config);

    TestApp {
        app: create_app(state),
        uploads_dir,
        _workspace: workspace,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request"),
    )
    .await
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn tiny_png_bytes() -> Vec<u8> {
    let uuid_bytes = *Uuid::now_v7().as_bytes();
    let raw = vec![
        uuid_bytes[0], uuid_bytes[1], uuid_bytes[2], 255,
        0, 160, 40, 255,
        uuid_bytes[3], uuid_bytes[4], uuid_bytes[5], 255,
        20, 120, 20, 255,
    ];
    let image = image::RgbaImage::from_raw(2, 2, raw).expect("failed to create image");
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("failed to encode png");
    bytes
}

/// A growth-log form. `image` is `(file name, bytes)`; `None` leaves the
/// file field out entirely.
pub fn multipart_record_body(
    user: Option<&str>,
    plant: Option<&str>,
    image: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    let boundary = format!("----garden-boundary-{}", Uuid::now_v7());
    let mut body = Vec::new();

    let mut push_text = |name: &str, value: &str| {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    };

    if let Some(user) = user {
        push_text("user", user);
    }
    if let Some(plant) = plant {
        push_text("plant", plant);
    }

    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (boundary, body)
}

pub async fn post_record(
    app: &Router,
    user: Option<&str>,
    plant: &str,
    image: Option<(&str, &[u8])>,
) -> axum::response::Response {
    post_form(app, multipart_record_body(user, Some(plant), image)).await
}

pub async fn post_form(
    app: &Router,
    (boundary, body): (String, Vec<u8>),
) -> axum::response::Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/v1/records")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .expect("failed to build request"),
    )
    .await
}

/// Uploads a PNG for `plant` as Guest and returns the stored image path.
pub async fn record_png(app: &Router, plant: &str) -> String {
    let png = tiny_png_bytes();
    let res = post_record(app, None, plant, Some(("leaf.png", png.as_slice()))).await;
    let res = expect_status(res, StatusCode::OK).await;
    let json: serde_json::Value = read_json(res).await;
    json["record"]["image_path"]
        .as_str()
        .expect("record has an image path")
        .to_string()
}
