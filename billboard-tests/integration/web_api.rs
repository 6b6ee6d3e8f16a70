//! Web API route tests against the assembled router.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use billboard_core::config::BillboardConfig;
use billboard_web::{AppState, router};
use serde_json::Value;
use tower::ServiceExt;

fn demo_router() -> axum::Router {
    router(AppState::new_fixture(&BillboardConfig::default()))
}

async fn get_json(uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = demo_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, cache_control, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn content_block_route_returns_render_structure() {
    let (status, cache_control, body) =
        get_json("/api/content-block?title=Agenda&query=jazz,film&limit=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=7200"));
    assert_eq!(body["theme"], "content_block");
    assert_eq!(body["title"], "Agenda");
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["more_link"]["url"], "/agenda?q=%28jazz%20AND%20film%29");
}

#[tokio::test]
async fn content_block_route_without_query_links_bare_route() {
    let (status, _, body) = get_json("/api/content-block").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["more_link"]["url"], "/agenda");
    assert_eq!(body["view_mode"], "teaser");
}

#[tokio::test]
async fn content_block_route_accepts_custom_link() {
    let (_, _, body) = get_json(
        "/api/content-block?default_more_link=false&more_link=/events/archive",
    )
    .await;

    assert_eq!(body["more_link"]["url"], "/events/archive");
}

#[tokio::test]
async fn content_block_route_drops_malformed_custom_link() {
    let (_, _, body) =
        get_json("/api/content-block?default_more_link=false&more_link=nonsense").await;

    assert!(body["more_link"].is_null());
}

#[tokio::test]
async fn search_route_serves_fixture_events() {
    let (status, _, body) = get_json("/api/search?q=jazz&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"].as_array().unwrap().len(), 2);
    assert!(body["totalItems"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = demo_router()
        .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
