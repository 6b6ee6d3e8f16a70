//! HTTP search client for production use.

use async_trait::async_trait;
use billboard_core::config::SearchConfig;

use super::SearchClient;
use crate::errors::SearchError;
use crate::query::SearchQuery;
use crate::types::PagedCollection;

/// Search client talking to the remote event search API over HTTP.
///
/// Sends the serialized query as URL parameters to the `/events` endpoint
/// and decodes the paged JSON envelope.
#[derive(Debug)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSearchClient {
    /// Creates a client from the search section of the configuration.
    pub fn new(config: &SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Creates a client for an explicit endpoint, bypassing configuration.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        let url = format!("{}/events", self.base_url);
        let query_text = query.query_text().unwrap_or_default().to_string();

        let mut request = self.client.get(&url).query(&query.to_params());
        if let Some(api_key) = &self.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        tracing::debug!(%url, query = %query_text, "executing event search");

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("search request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SearchError::SearchFailed {
                query: query_text,
                reason: format!("search API returned HTTP {}", response.status()),
            });
        }

        response
            .json::<PagedCollection>()
            .await
            .map_err(|e| SearchError::ParseError {
                reason: format!("search response decoding failed: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::query::{AudienceType, SortDirection};

    #[tokio::test]
    async fn sends_query_params_and_decodes_envelope() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/events")
                    .query_param("q", "(jazz AND brussels)")
                    .query_param("audienceType", "*")
                    .query_param("limit", "3")
                    .query_param("embed", "true");
                then.status(200).json_body(json!({
                    "itemsPerPage": 3,
                    "totalItems": 1,
                    "member": [{"id": "e1", "name": "Jazz Night"}]
                }));
            })
            .await;

        let client = HttpSearchClient::with_base_url(server.base_url(), None);
        let query = SearchQuery::new(true)
            .with_query("(jazz AND brussels)")
            .with_audience(AudienceType::Everyone)
            .with_limit(3);

        let collection = client.search_events(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(collection.items().len(), 1);
        assert_eq!(collection.member[0].name, "Jazz Night");
    }

    #[tokio::test]
    async fn sends_sort_clause_and_api_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/events")
                    .query_param("sort[availableTo]", "asc")
                    .header("X-Api-Key", "secret");
                then.status(200).json_body(json!({"member": []}));
            })
            .await;

        let client = HttpSearchClient::with_base_url(server.base_url(), Some("secret".into()));
        let query = SearchQuery::new(false).with_sort("availableTo", SortDirection::Asc);

        let collection = client.search_events(&query).await.unwrap();

        mock.assert_async().await;
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_maps_to_search_failed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/events");
                then.status(503);
            })
            .await;

        let client = HttpSearchClient::with_base_url(server.base_url(), None);
        let query = SearchQuery::new(true).with_query("(jazz)");

        let error = client.search_events(&query).await.unwrap_err();
        assert!(matches!(error, SearchError::SearchFailed { .. }));
    }

    #[tokio::test]
    async fn invalid_body_maps_to_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/events");
                then.status(200).body("not json");
            })
            .await;

        let client = HttpSearchClient::with_base_url(server.base_url(), None);
        let query = SearchQuery::new(true);

        let error = client.search_events(&query).await.unwrap_err();
        assert!(matches!(error, SearchError::ParseError { .. }));
    }
}
