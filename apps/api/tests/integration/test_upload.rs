use super::helpers::{
    expect_status, get, multipart_record_body, post_form, post_record, read_json, record_png,
    send, spawn_app, tiny_png_bytes,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

async fn guest_record_count(app: &axum::Router) -> usize {
    let res = expect_status(get(app, "/api/v1/records").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    body["records"].as_array().expect("records array").len()
}

#[tokio::test]
async fn form_without_photo_is_ignored() {
    let test = spawn_app().await;

    let res = post_record(&test.app, Some("Hanako"), "tomato", None).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["recorded"], false);
    assert!(body["record"].is_null());
    assert_eq!(guest_record_count(&test.app).await, 0);

    let res = get(&test.app, "/api/v1/records?user=Hanako").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert!(body["records"].as_array().unwrap().is_empty());

    let stored = std::fs::read_dir(&test.uploads_dir).unwrap().count();
    assert_eq!(stored, 0, "no file may be written without a photo");
}

#[tokio::test]
async fn form_without_photo_skips_plant_checks() {
    let test = spawn_app().await;

    let body = multipart_record_body(Some("Hanako"), None, None);
    let res = expect_status(post_form(&test.app, body).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["recorded"], false);

    let body = multipart_record_body(None, Some("cactus"), Some(("empty.png", [].as_slice())));
    let res = expect_status(post_form(&test.app, body).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["recorded"], false);

    assert_eq!(guest_record_count(&test.app).await, 0);
}

#[tokio::test]
async fn png_upload_creates_guest_record_and_serves_the_file() {
    let test = spawn_app().await;
    let png = tiny_png_bytes();

    let res = post_record(
        &test.app,
        Some("   "),
        "basil",
        Some(("leaf.PNG", png.as_slice())),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["recorded"], true);
    assert_eq!(body["record"]["user"], "Guest");
    assert_eq!(body["record"]["plant"], "basil");
    assert_eq!(
        body["record"]["date"],
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    );

    let image_url = body["image_url"].as_str().unwrap().to_string();
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".PNG"));

    let res = expect_status(get(&test.app, &image_url).await, StatusCode::OK).await;
    let served = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(served.as_ref(), png.as_slice());

    assert_eq!(guest_record_count(&test.app).await, 1);
}

#[tokio::test]
async fn same_second_uploads_keep_both_files() {
    let test = spawn_app().await;

    let first = record_png(&test.app, "tomato").await;
    let second = record_png(&test.app, "tomato").await;

    assert_ne!(first, second);
    assert_eq!(std::fs::read_dir(&test.uploads_dir).unwrap().count(), 2);
}

#[tokio::test]
async fn user_timeline_counts_posts_per_day() {
    let test = spawn_app().await;
    let png = tiny_png_bytes();

    for plant in ["tomato", "basil"] {
        let image = Some(("p.jpg.png", png.as_slice()));
        let res = post_record(&test.app, Some("Taro"), plant, image).await;
        expect_status(res, StatusCode::OK).await;
    }
    record_png(&test.app, "lettuce").await;

    let res = get(&test.app, "/api/v1/records?user=Taro").await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["user"], "Taro");
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
    let daily = body["daily_counts"].as_array().unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0]["count"], 2);
}

#[tokio::test]
async fn unsupported_extension_is_rejected() {
    let test = spawn_app().await;
    let png = tiny_png_bytes();

    let res = post_record(&test.app, None, "tomato", Some(("leaf.gif", png.as_slice()))).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;

    assert!(body["error"].as_str().unwrap().contains("leaf.gif"));
    assert_eq!(guest_record_count(&test.app).await, 0);
}

#[tokio::test]
async fn bytes_that_are_not_an_image_are_rejected() {
    let test = spawn_app().await;

    let res = post_record(
        &test.app,
        None,
        "tomato",
        Some(("leaf.jpg", b"definitely not a jpeg".as_slice())),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
    assert_eq!(std::fs::read_dir(&test.uploads_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn content_must_match_the_extension() {
    let test = spawn_app().await;
    let png = tiny_png_bytes();

    let res = post_record(&test.app, None, "basil", Some(("leaf.jpg", png.as_slice()))).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;

    assert!(body["error"].as_str().unwrap().contains("leaf.jpg"));
    assert_eq!(std::fs::read_dir(&test.uploads_dir).unwrap().count(), 0);
    assert_eq!(guest_record_count(&test.app).await, 0);
}

#[tokio::test]
async fn unknown_plant_is_rejected() {
    let test = spawn_app().await;
    let png = tiny_png_bytes();

    let res = post_record(&test.app, None, "cactus", Some(("leaf.png", png.as_slice()))).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let test = spawn_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/records")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let res = send(&test.app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
