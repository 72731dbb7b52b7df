//! Health, root metadata, and fallback route tests

mod helpers;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_reports_status_and_environment() -> anyhow::Result<()> {
    let (app, _pool) = helpers::test_app().await?;

    let response = app.clone().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["environment"], json!("test"));
    assert!(body["timestamp"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_root_lists_endpoints() -> anyhow::Result<()> {
    let (app, _pool) = helpers::test_app().await?;

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["endpoints"]["health"], json!("/api/health"));
    assert_eq!(body["endpoints"]["contact"], json!("/api/contact"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_404_envelope() -> anyhow::Result<()> {
    let (app, _pool) = helpers::test_app().await?;

    let response = app.clone().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Route not found"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_method_style_post_also_falls_back() -> anyhow::Result<()> {
    let (app, _pool) = helpers::test_app().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/totally/elsewhere")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["message"], json!("Route not found"));

    Ok(())
}
