//! Request handlers for the Billboard JSON API.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use billboard_content::{ContentBlock, ContentBlockRequest};
use billboard_search::PagedCollection;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::server::AppState;

/// Query parameters of the content-block endpoint.
///
/// Every field is optional; absent fields take the builder defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentBlockParams {
    title: String,
    query: String,
    view_mode: String,
    limit: usize,
    sort: Option<String>,
    sort_direction: String,
    default_more_link: bool,
    more_link: String,
}

impl Default for ContentBlockParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            query: String::new(),
            view_mode: String::new(),
            limit: 0,
            sort: None,
            sort_direction: String::new(),
            default_more_link: true,
            more_link: String::new(),
        }
    }
}

impl ContentBlockParams {
    fn into_request(self) -> ContentBlockRequest {
        ContentBlockRequest {
            title: self.title,
            query: self.query,
            view_mode: self.view_mode,
            limit: self.limit,
            sort: self.sort,
            sort_direction: self.sort_direction.parse().unwrap_or_default(),
            default_more_link: self.default_more_link,
            more_link: self.more_link,
        }
    }
}

/// Builds a content block and serves it with matching cache headers.
pub async fn api_content_block(
    State(state): State<AppState>,
    Query(params): Query<ContentBlockParams>,
) -> Response {
    let block = state.builder.build(params.into_request()).await;

    ([(header::CACHE_CONTROL, cache_control(&block))], Json(&block)).into_response()
}

/// Raw search passthrough: `q` plus an optional `limit`.
///
/// An empty query or a failed delegate call both yield an empty
/// collection; failures are logged, never surfaced.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let query = params.get("q").map(|s| s.as_str()).unwrap_or("");
    if query.is_empty() {
        return Json(json!(PagedCollection::default()));
    }

    let limit = params
        .get("limit")
        .and_then(|limit| limit.parse().ok())
        .unwrap_or(10);

    match state.search.search_text(query, limit).await {
        Ok(results) => Json(json!(results)),
        Err(error) => {
            tracing::warn!(%error, "search API request failed");
            Json(json!(PagedCollection::default()))
        }
    }
}

/// Liveness endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}

/// Translates the block's cache directives to a `Cache-Control` value.
fn cache_control(block: &ContentBlock) -> String {
    if block.cache.is_cacheable() {
        format!("public, max-age={}", block.cache.max_age)
    } else {
        "no-store".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use billboard_core::config::BillboardConfig;
    use billboard_search::{EventSearchService, SearchClient, SearchError, SearchQuery};
    use tower::ServiceExt;

    use super::*;
    use crate::server::router;

    #[derive(Debug)]
    struct FailingClient;

    #[async_trait]
    impl SearchClient for FailingClient {
        async fn search_events(
            &self,
            _query: &SearchQuery,
        ) -> Result<PagedCollection, SearchError> {
            Err(SearchError::NetworkError {
                reason: "connection refused".to_string(),
            })
        }
    }

    fn fixture_router() -> axum::Router {
        router(AppState::new_fixture(&BillboardConfig::default()))
    }

    fn failing_router() -> axum::Router {
        let service = EventSearchService::with_client(Arc::new(FailingClient));
        router(AppState::with_service(
            service,
            &BillboardConfig::default(),
        ))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn content_block_endpoint_serves_cacheable_block() {
        let response = fixture_router()
            .oneshot(
                Request::builder()
                    .uri("/api/content-block?title=Concerts&query=jazz,brussels&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=7200"
        );

        let body = body_json(response).await;
        assert_eq!(body["theme"], "content_block");
        assert_eq!(body["title"], "Concerts");
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["more_link"]["url"],
            "/agenda?q=%28jazz%20AND%20brussels%29"
        );
    }

    #[tokio::test]
    async fn failed_search_serves_no_store_block() {
        let response = failing_router()
            .oneshot(
                Request::builder()
                    .uri("/api/content-block?query=jazz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

        let body = body_json(response).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 0);
        assert_eq!(body["cache"]["max_age"], 0);
    }

    #[tokio::test]
    async fn search_endpoint_returns_collection() {
        let response = fixture_router()
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=jazz&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["member"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn search_endpoint_swallows_delegate_failure() {
        let response = failing_router()
            .oneshot(
                Request::builder()
                    .uri("/api/search?q=jazz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["member"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_search_query_short_circuits() {
        let response = failing_router()
            .oneshot(Request::builder().uri("/api/search").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["member"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = fixture_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
