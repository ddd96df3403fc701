use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tinyurl_gateway::model::{CreateUrlResponse, StatsResponse, UrlResponse};
use tinyurl_gateway::{App, AppState};
use tinyurl_generator::RandomGenerator;
use tinyurl_shortener::ShortenerService;
use tinyurl_storage::InMemoryRepository;
use tower::ServiceExt;

const BASE_URL: &str = "https://tiny.url";

fn app() -> Router {
    let service = ShortenerService::new(InMemoryRepository::new(), RandomGenerator::default());
    App::router(AppState::new(Arc::new(service), BASE_URL))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn create(body: Value) -> Request<Body> {
    Request::post("/v1/urls")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health() {
    let app = app();

    let (status, _, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_with_custom_code_then_redirect() {
    let app = app();

    let (status, _, body) = send(
        &app,
        create(json!({ "long_url": "https://example.com/page", "short_code": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: CreateUrlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.short_code, "abc");
    assert_eq!(created.short_url, "https://tiny.url/abc");
    assert_eq!(created.long_url, "https://example.com/page");

    let (status, headers, _) = send(&app, get("/abc")).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "https://example.com/page");
}

#[tokio::test]
async fn create_with_generated_code() {
    let app = app();

    let (status, _, body) = send(&app, create(json!({ "long_url": "https://example.com" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    let created: CreateUrlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.short_code.len(), 7);
    assert_eq!(created.short_url, format!("{BASE_URL}/{}", created.short_code));
}

#[tokio::test]
async fn duplicate_code_conflicts() {
    let app = app();
    let body = json!({ "long_url": "https://example.com", "short_code": "dup" });

    let (first, _, _) = send(&app, create(body.clone())).await;
    let (second, _, body) = send(&app, create(body)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "short code already exists");
}

#[tokio::test]
async fn invalid_request_lists_violations() {
    let app = app();

    let (status, _, body) = send(
        &app,
        create(json!({ "long_url": "ftp://example.com", "short_code": "has space" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "validation failed");
    let fields: Vec<_> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["long_url", "short_code"]);
}

#[tokio::test]
async fn redirect_unknown_code_is_not_found() {
    let app = app();

    let (status, _, body) = send(&app, get("/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn lookup_reports_visits_without_counting() {
    let app = app();
    send(
        &app,
        create(json!({ "long_url": "https://example.com", "short_code": "y" })),
    )
    .await;

    for _ in 0..3 {
        send(&app, get("/y")).await;
    }

    let (status, _, body) = send(&app, get("/v1/urls/y")).await;
    assert_eq!(status, StatusCode::OK);
    let mapping: UrlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(mapping.visit_count, 3);
    assert_eq!(mapping.long_url, "https://example.com");

    let (_, _, body) = send(&app, get("/v1/urls/y")).await;
    let mapping: UrlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(mapping.visit_count, 3);
}

#[tokio::test]
async fn delete_then_not_found() {
    let app = app();
    send(
        &app,
        create(json!({ "long_url": "https://example.com", "short_code": "x" })),
    )
    .await;

    let (first, _, _) = send(&app, delete("/v1/urls/x")).await;
    let (redirect, _, _) = send(&app, get("/x")).await;
    let (second, _, _) = send(&app, delete("/v1/urls/x")).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(redirect, StatusCode::NOT_FOUND);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_lists_every_mapping() {
    let app = app();
    for code in ["a", "b"] {
        send(
            &app,
            create(json!({ "long_url": format!("https://{code}.example"), "short_code": code })),
        )
        .await;
    }
    send(&app, get("/a")).await;

    let (status, _, body) = send(&app, get("/v1/stats")).await;

    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    let mut keys: Vec<_> = raw.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(raw["a"]["long_url"], "https://a.example");

    let stats: StatsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(stats.0["a"].visit_count, 1);
    assert_eq!(stats.0["b"].visit_count, 0);
    assert_eq!(stats.0["b"].short_url, "https://tiny.url/b");
}

#[tokio::test]
async fn stats_of_empty_table_is_empty_object() {
    let app = app();

    let (status, _, body) = send(&app, get("/v1/stats")).await;

    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(raw, json!({}));
}

#[tokio::test]
async fn returned_short_url_redirects_for_special_codes() {
    let app = app();

    for code in ["a/b", "q?x", "frag#1", "100%"] {
        let target = format!("https://example.com/{}", code.len());
        let (status, _, body) = send(
            &app,
            create(json!({ "long_url": target, "short_code": code })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create {code:?}");

        let created: CreateUrlResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.short_code, code);
        let path = created.short_url.strip_prefix(BASE_URL).unwrap();

        let (status, headers, _) = send(&app, get(path)).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT, "follow {path}");
        assert_eq!(headers[header::LOCATION], target.as_str());

        let (status, _, body) = send(&app, get(&format!("/v1/urls{path}"))).await;
        assert_eq!(status, StatusCode::OK, "lookup {path}");
        let mapping: UrlResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(mapping.short_code, code);
        assert_eq!(mapping.visit_count, 1);
    }
}

#[tokio::test]
async fn route_names_are_reserved() {
    let app = app();

    for code in ["health", "v1", ".", ".."] {
        let (status, _, body) = send(
            &app,
            create(json!({ "long_url": "https://example.com", "short_code": code })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "code {code:?}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["details"][0]["field"], "short_code");
    }

    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}
