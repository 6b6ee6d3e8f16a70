//! Search service wiring tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billboard_search::{
    EventSearchService, PagedCollection, SearchClient, SearchError, SearchQuery,
};

/// Captures the parameter sets of every query routed through the service.
#[derive(Debug, Default)]
struct CapturingClient {
    seen: Mutex<Vec<Vec<(String, String)>>>,
}

#[async_trait]
impl SearchClient for CapturingClient {
    async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        self.seen.lock().unwrap().push(query.to_params());
        Ok(PagedCollection::default())
    }
}

#[tokio::test]
async fn search_text_routes_unrestricted_embedded_query() {
    let client = Arc::new(CapturingClient::default());
    let service = EventSearchService::with_client(client.clone());

    service.search_text("(jazz AND brussels)", 7).await.unwrap();

    let seen = client.seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        [vec![
            ("q".to_string(), "(jazz AND brussels)".to_string()),
            ("audienceType".to_string(), "*".to_string()),
            ("limit".to_string(), "7".to_string()),
            ("embed".to_string(), "true".to_string()),
        ]]
    );
}

#[tokio::test]
async fn fixture_service_honors_limit_and_reports_total() {
    let service = EventSearchService::new_fixture();

    let collection = service.search_text("anything", 2).await.unwrap();

    assert_eq!(collection.items().len(), 2);
    assert!(collection.total_items > 2);
}

#[tokio::test]
async fn fixture_events_carry_display_fields() {
    let service = EventSearchService::new_fixture();

    let collection = service.search_text("anything", 1).await.unwrap();
    let event = &collection.items()[0];

    assert!(!event.id.is_empty());
    assert!(!event.name.is_empty());
    assert!(event.start_date.is_some());
}
