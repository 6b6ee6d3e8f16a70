//! Event search service.
//!
//! Thin wrapper owning a search client, so consumers depend on one concrete
//! type and swap backends (HTTP, fixture data, test doubles) at
//! construction time.

use std::sync::Arc;

use billboard_core::config::SearchConfig;

use crate::clients::{FixtureSearchClient, HttpSearchClient, SearchClient};
use crate::errors::SearchError;
use crate::query::{AudienceType, SearchQuery};
use crate::types::PagedCollection;

/// Event search service delegating to a pluggable client.
#[derive(Debug, Clone)]
pub struct EventSearchService {
    client: Arc<dyn SearchClient>,
}

impl EventSearchService {
    /// Creates a service backed by the production HTTP client.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: Arc::new(HttpSearchClient::new(config)),
        }
    }

    /// Creates a service backed by canned fixture data.
    pub fn new_fixture() -> Self {
        Self {
            client: Arc::new(FixtureSearchClient::new()),
        }
    }

    /// Creates a service with an injected client.
    pub fn with_client(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    /// Execute an event search.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Search operation failed
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response body could not be decoded
    pub async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        self.client.search_events(query).await
    }

    /// Search by free text with an unrestricted audience.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Search operation failed
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response body could not be decoded
    pub async fn search_text(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<PagedCollection, SearchError> {
        let query = SearchQuery::new(true)
            .with_query(text)
            .with_audience(AudienceType::Everyone)
            .with_limit(limit);

        self.search_events(&query).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::types::Event;

    #[derive(Debug)]
    struct SingleEventClient;

    #[async_trait]
    impl SearchClient for SingleEventClient {
        async fn search_events(
            &self,
            query: &SearchQuery,
        ) -> Result<PagedCollection, SearchError> {
            assert_eq!(query.query_text(), Some("(jazz)"));
            Ok(PagedCollection {
                items_per_page: 1,
                total_items: 1,
                member: vec![Event {
                    id: "e1".to_string(),
                    name: "Jazz Night".to_string(),
                    description: None,
                    start_date: None,
                    end_date: None,
                    location: None,
                    image: None,
                    url: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn search_text_builds_unrestricted_query() {
        let service = EventSearchService::with_client(Arc::new(SingleEventClient));
        let collection = service.search_text("(jazz)", 10).await.unwrap();

        assert_eq!(collection.items().len(), 1);
        assert_eq!(collection.member[0].name, "Jazz Night");
    }

    #[tokio::test]
    async fn fixture_service_serves_events() {
        let service = EventSearchService::new_fixture();
        let collection = service.search_text("", 3).await.unwrap();

        assert!(!collection.is_empty());
        assert!(collection.items().len() <= 3);
    }
}
