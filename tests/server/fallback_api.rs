use image::RgbaImage;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    SEARCH_PATH, TestApp, content_type, search_hits, spawn_app, unused_address,
};

async fn spawn_app_without_hits() -> TestApp {
    let app = spawn_app().await;
    app.mount_search_response(json!({ "hits": { "total": 0, "hits": [] } }))
        .await;
    app
}

async fn placeholder(app: &TestApp, query: &str) -> RgbaImage {
    decode_placeholder(app.get(&format!("/isbn/1?{query}")).await).await
}

async fn decode_placeholder(response: reqwest::Response) -> RgbaImage {
    assert_eq!(response.status(), 200);
    assert_eq!(content_type(&response), Some("image/png"));

    let body = response.bytes().await.expect("failed to read body");
    image::load_from_memory_with_format(&body, image::ImageFormat::Png)
        .expect("placeholder should be a PNG")
        .to_rgba8()
}

fn assert_solid(img: &RgbaImage, expected: [u8; 4]) {
    assert_eq!(img.dimensions(), (100, 150));
    assert!(
        img.pixels().all(|p| p.0 == expected),
        "expected every pixel to be {expected:?}"
    );
}

#[tokio::test]
async fn miss_without_flag_is_plain_404() {
    let app = spawn_app_without_hits().await;

    let response = app.get("/isbn/1?color=ff0000").await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn empty_flag_is_plain_404() {
    let app = spawn_app_without_hits().await;

    let response = app.get("/isbn/1?notFoundImage=").await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn default_placeholder_is_opaque_white() {
    let app = spawn_app_without_hits().await;

    let img = placeholder(&app, "notFoundImage=1").await;

    assert_solid(&img, [255, 255, 255, 255]);
}

#[tokio::test]
async fn color_parameter_sets_fill() {
    let app = spawn_app_without_hits().await;

    let img = placeholder(&app, "notFoundImage=true&color=ff0000").await;

    assert_solid(&img, [255, 0, 0, 255]);
}

#[tokio::test]
async fn invalid_color_pair_falls_back_per_channel() {
    let app = spawn_app_without_hits().await;

    let img = placeholder(&app, "notFoundImage=1&color=zz0000").await;
    assert_solid(&img, [255, 0, 0, 255]);

    let img = placeholder(&app, "notFoundImage=1&color=1020qq").await;
    assert_solid(&img, [16, 32, 255, 255]);
}

#[tokio::test]
async fn wrong_length_color_is_white() {
    let app = spawn_app_without_hits().await;

    let img = placeholder(&app, "notFoundImage=1&color=f00").await;

    assert_solid(&img, [255, 255, 255, 255]);
}

#[tokio::test]
async fn placeholder_served_for_hits_without_images() {
    let app = spawn_app().await;
    app.mount_search_response(search_hits(&[""])).await;

    let img = placeholder(&app, "notFoundImage=1&color=000000").await;

    assert_solid(&img, [0, 0, 0, 255]);
    assert_eq!(app.origin_requests().await, 0);
}

#[tokio::test]
async fn placeholder_only_costs_the_lookup() {
    let app = spawn_app_without_hits().await;

    placeholder(&app, "notFoundImage=1").await;

    assert_eq!(app.backend_requests().await, 1);
    assert_eq!(app.origin_requests().await, 0);
}

#[tokio::test]
async fn empty_value_is_looked_up_and_falls_back() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_json(json!({
            "_source": ["image"],
            "query": { "term": { "isbn": "" } }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "hits": { "total": 0, "hits": [] } })),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let img = decode_placeholder(app.get("/isbn/?notFoundImage=1").await).await;

    assert_solid(&img, [255, 255, 255, 255]);
    assert_eq!(app.backend_requests().await, 1);
}

#[tokio::test]
async fn placeholder_served_when_origin_is_unreachable() {
    let app = spawn_app().await;
    let dead_image = format!("http://{}/cover.jpg", unused_address().await);
    app.mount_search_response(search_hits(&[dead_image.as_str()]))
        .await;

    let img = placeholder(&app, "notFoundImage=1&color=0000ff").await;

    assert_solid(&img, [0, 0, 255, 255]);
}
