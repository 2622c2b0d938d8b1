//! End-to-end tests of the sitemap router against an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use mapia_posts::{MockPostStore, StoreErrorKind};
use mapia_server::sitemap_router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

const SITE_URL: &str = "https://mapia.vercel.app";

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, header::HeaderMap, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, header::HeaderMap, String) {
    send(app, Method::GET, uri).await
}

#[tokio::test]
async fn test_empty_store_returns_root_only() {
    let app = sitemap_router(Arc::new(MockPostStore::new()), SITE_URL);

    let (status, _, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(body.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    assert_eq!(body.matches("<url>").count(), 1);
    assert!(body.contains("<loc>https://mapia.vercel.app/</loc>"));
    assert!(body.trim_end().ends_with("</urlset>"));
}

#[tokio::test]
async fn test_success_headers() {
    let app = sitemap_router(Arc::new(MockPostStore::new()), SITE_URL);

    let (_, headers, _) = get(app, "/sitemap.xml").await;

    assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "s-maxage=86400, stale-while-revalidate"
    );
}

#[tokio::test]
async fn test_posts_follow_root_in_store_order() {
    let store = MockPostStore::new()
        .with_post(30, "2024-03-03T00:00:00Z")
        .with_post(10, "2024-03-01T00:00:00Z")
        .with_post(20, "2024-03-02T00:00:00Z");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (status, _, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<url>").count(), 4);
    let positions: Vec<usize> = [
        "<loc>https://mapia.vercel.app/</loc>",
        "<loc>https://mapia.vercel.app/#/post/30</loc>",
        "<loc>https://mapia.vercel.app/#/post/10</loc>",
        "<loc>https://mapia.vercel.app/#/post/20</loc>",
    ]
    .iter()
    .map(|loc| body.find(loc).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_post_entry_loc_and_lastmod() {
    let store = MockPostStore::new().with_post("42", "2024-03-01T10:00:00.000Z");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (_, _, body) = get(app, "/sitemap.xml").await;

    assert!(body.contains(
        "    <loc>https://mapia.vercel.app/#/post/42</loc>\n    <lastmod>2024-03-01T10:00:00.000Z</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>0.8</priority>"
    ));
}

#[tokio::test]
async fn test_any_path_and_method_served() {
    let store = Arc::new(MockPostStore::new().with_post(1, "2024-03-01"));
    let app = sitemap_router(Arc::<MockPostStore>::clone(&store), SITE_URL);

    let (get_status, _, get_body) = get(app.clone(), "/api/sitemap").await;
    let (post_status, _, post_body) = send(app, Method::POST, "/").await;

    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(post_status, StatusCode::OK);
    assert_eq!(get_body, post_body);
    assert_eq!(store.fetch_count(), 2);
}

#[tokio::test]
async fn test_store_failure_returns_json_500() {
    let store = MockPostStore::failing(StoreErrorKind::Unavailable, "connection refused");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (status, headers, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert!(headers.get(header::CACHE_CONTROL).is_none());
    let json: Value = serde_json::from_str(&body).unwrap();
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("post list"), "got: {error}");
    assert!(error.contains("connection refused"), "got: {error}");
}

#[tokio::test]
async fn test_malformed_created_at_returns_json_500() {
    let store = MockPostStore::new()
        .with_post(1, "2024-03-01T10:00:00Z")
        .with_post(2, "last tuesday");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (status, _, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_str(&body).unwrap();
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("post 2"), "got: {error}");
    assert!(error.contains("last tuesday"), "got: {error}");
}

#[tokio::test]
async fn test_leap_second_created_at_returns_json_500() {
    let store = MockPostStore::new().with_post(7, "2024-06-30T23:59:60Z");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (status, _, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("post 7"));
}

#[tokio::test]
async fn test_null_created_at_returns_json_500() {
    let store = MockPostStore::new().with_untimed_post(5);
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (status, _, body) = get(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("post 5"));
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let store = MockPostStore::new()
        .with_post(1, "2024-03-01T10:00:00+09:00")
        .with_post(2, "2024-03-02");
    let app = sitemap_router(Arc::new(store), SITE_URL);

    let (_, _, first) = get(app.clone(), "/sitemap.xml").await;
    let (_, _, second) = get(app, "/sitemap.xml").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_each_request_queries_store_once() {
    let store = Arc::new(MockPostStore::new());
    let app = sitemap_router(Arc::<MockPostStore>::clone(&store), SITE_URL);

    let _ = get(app, "/sitemap.xml").await;

    assert_eq!(store.fetch_count(), 1);
}
