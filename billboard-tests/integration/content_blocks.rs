//! End-to-end content-block pipeline tests.
//!
//! Drives `ContentBlockBuilder` against scripted search clients and checks
//! the full contract: query normalization as seen by the delegate, link
//! resolution, item population, and cache degradation on failure.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use billboard_content::{ContentBlockBuilder, ContentBlockRequest};
use billboard_core::config::ContentConfig;
use billboard_search::{
    Event, EventSearchService, PagedCollection, SearchClient, SearchError, SearchQuery,
    SortDirection,
};

fn event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Event {id}"),
        description: None,
        start_date: None,
        end_date: None,
        location: None,
        image: None,
        url: None,
    }
}

/// Records every query it receives and answers with a fixed event list.
#[derive(Debug, Default)]
struct RecordingClient {
    item_count: usize,
    seen: Mutex<Vec<Vec<(String, String)>>>,
}

impl RecordingClient {
    fn with_items(item_count: usize) -> Arc<Self> {
        Arc::new(Self {
            item_count,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last_params(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl SearchClient for RecordingClient {
    async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        self.seen.lock().unwrap().push(query.to_params());
        let member: Vec<Event> = (0..self.item_count)
            .map(|i| event(&i.to_string()))
            .collect();
        Ok(PagedCollection {
            items_per_page: member.len() as u32,
            total_items: member.len() as u32,
            member,
        })
    }
}

#[derive(Debug)]
struct FailingClient;

#[async_trait]
impl SearchClient for FailingClient {
    async fn search_events(&self, _query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        Err(SearchError::SearchFailed {
            query: "(jazz)".to_string(),
            reason: "upstream outage".to_string(),
        })
    }
}

fn builder(client: Arc<dyn SearchClient>) -> ContentBlockBuilder {
    ContentBlockBuilder::new(
        EventSearchService::with_client(client),
        ContentConfig::default(),
    )
}

#[tokio::test]
async fn delegate_receives_normalized_query_and_audience() {
    let client = RecordingClient::with_items(1);
    let block = builder(client.clone())
        .build(ContentBlockRequest {
            query: "a,b,c".to_string(),
            limit: 4,
            sort: Some("availableTo".to_string()),
            sort_direction: SortDirection::Asc,
            ..Default::default()
        })
        .await;

    assert_eq!(block.items.len(), 1);

    let params = client.last_params();
    assert!(params.contains(&("q".to_string(), "(a AND b AND c)".to_string())));
    assert!(params.contains(&("audienceType".to_string(), "*".to_string())));
    assert!(params.contains(&("limit".to_string(), "4".to_string())));
    assert!(params.contains(&("sort[availableTo]".to_string(), "asc".to_string())));
    assert!(params.contains(&("embed".to_string(), "true".to_string())));
}

#[tokio::test]
async fn successful_search_populates_items_and_two_hour_max_age() {
    let block = builder(RecordingClient::with_items(5))
        .build(ContentBlockRequest {
            query: "a,b,c".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(block.items.len(), 5);
    assert_eq!(block.cache.max_age, 7200);
    assert_eq!(block.cache.tags, vec!["event_search".to_string()]);
}

#[tokio::test]
async fn failing_search_leaves_items_empty_and_zeroes_max_age() {
    let block = builder(Arc::new(FailingClient))
        .build(ContentBlockRequest {
            query: "a,b,c".to_string(),
            ..Default::default()
        })
        .await;

    assert!(block.items.is_empty());
    assert_eq!(block.cache.max_age, 0);
}

#[tokio::test]
async fn default_more_link_carries_normalized_query() {
    let block = builder(RecordingClient::with_items(0))
        .build(ContentBlockRequest {
            query: "a,b,c".to_string(),
            ..Default::default()
        })
        .await;

    let link = block.more_link.expect("default link expected");
    assert_eq!(link.url, "/agenda?q=%28a%20AND%20b%20AND%20c%29");
}

#[tokio::test]
async fn default_more_link_without_query_targets_bare_route() {
    let block = builder(RecordingClient::with_items(0))
        .build(ContentBlockRequest::default())
        .await;

    assert_eq!(block.more_link.expect("default link expected").url, "/agenda");
}

#[tokio::test]
async fn malformed_custom_link_resolves_to_none() {
    let block = builder(RecordingClient::with_items(0))
        .build(ContentBlockRequest {
            default_more_link: false,
            more_link: "not a reference".to_string(),
            ..Default::default()
        })
        .await;

    assert!(block.more_link.is_none());
}

#[tokio::test]
async fn well_formed_custom_link_is_kept_verbatim() {
    let block = builder(RecordingClient::with_items(0))
        .build(ContentBlockRequest {
            default_more_link: false,
            more_link: "https://example.com/agenda".to_string(),
            ..Default::default()
        })
        .await;

    assert_eq!(
        block.more_link.expect("custom link expected").url,
        "https://example.com/agenda"
    );
}

#[tokio::test]
async fn serialized_block_exposes_render_fields() {
    let block = builder(RecordingClient::with_items(2))
        .build(ContentBlockRequest {
            title: "Concerts".to_string(),
            query: "jazz".to_string(),
            ..Default::default()
        })
        .await;

    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["theme"], "content_block");
    assert_eq!(json["view_mode"], "teaser");
    assert_eq!(json["title"], "Concerts");
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["cache"]["tags"][0], "event_search");
    assert_eq!(json["cache"]["max_age"], 7200);
    assert_eq!(json["more_link"]["text"], "Show all events");
}
