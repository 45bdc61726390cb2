use axum::{body::Body, http::{Request, StatusCode}};
use http_body_util::BodyExt;
use tower::ServiceExt;

use visitor_badge::config::Config;

#[tokio::test]
async fn assembled_app_serves_ping_and_status() {
    let cfg = Config { port: 0, shields_url: "http://127.0.0.1:1".into(), ..Config::default() };
    let (app, port) = visitor_badge::build_app(cfg).await.unwrap();
    assert_eq!(port, 0);

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let report: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(report["cached_hashes"], 0);
    assert_eq!(report["processed_requests"], 0);
}

#[tokio::test]
async fn invalid_shields_url_fails_startup() {
    let cfg = Config { shields_url: "::nonsense::".into(), ..Config::default() };
    assert!(visitor_badge::build_app(cfg).await.is_err());
}
