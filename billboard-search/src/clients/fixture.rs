//! Fixture search client for development and demo mode.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::SearchClient;
use crate::errors::SearchError;
use crate::query::SearchQuery;
use crate::types::{Event, PagedCollection};

/// Search client serving canned event data.
///
/// Lets the CLI and web server run the complete rendering workflow without
/// a reachable search API. Honors the query limit; ignores the query text.
#[derive(Debug, Default)]
pub struct FixtureSearchClient;

impl FixtureSearchClient {
    /// Creates a new fixture client.
    pub fn new() -> Self {
        Self
    }

    fn canned_events() -> Vec<Event> {
        let base = Utc::now();

        vec![
            Event {
                id: "fixture-jazz-night".to_string(),
                name: "Jazz Night at the Docks".to_string(),
                description: Some("An evening of improvised jazz on the waterfront.".to_string()),
                start_date: Some(base + Duration::days(2)),
                end_date: Some(base + Duration::days(2) + Duration::hours(4)),
                location: Some("Dock 5".to_string()),
                image: Some("/static/fixtures/jazz-night.jpg".to_string()),
                url: Some("/agenda/fixture-jazz-night".to_string()),
            },
            Event {
                id: "fixture-open-air-cinema".to_string(),
                name: "Open Air Cinema: Classics".to_string(),
                description: Some("Classic films under the summer sky.".to_string()),
                start_date: Some(base + Duration::days(5)),
                end_date: None,
                location: Some("City Park".to_string()),
                image: Some("/static/fixtures/open-air-cinema.jpg".to_string()),
                url: Some("/agenda/fixture-open-air-cinema".to_string()),
            },
            Event {
                id: "fixture-sculpture-walk".to_string(),
                name: "Sculpture Walk".to_string(),
                description: None,
                start_date: Some(base + Duration::days(9)),
                end_date: Some(base + Duration::days(30)),
                location: Some("Old Town".to_string()),
                image: None,
                url: Some("/agenda/fixture-sculpture-walk".to_string()),
            },
            Event {
                id: "fixture-choir-rehearsal".to_string(),
                name: "Open Choir Rehearsal".to_string(),
                description: Some("Sing along with the city choir, no experience needed.".to_string()),
                start_date: Some(base + Duration::days(12)),
                end_date: None,
                location: Some("Concert Hall".to_string()),
                image: None,
                url: None,
            },
        ]
    }
}

#[async_trait]
impl SearchClient for FixtureSearchClient {
    async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError> {
        let mut events = Self::canned_events();
        let total = events.len() as u32;

        if let Some(limit) = query.limit() {
            events.truncate(limit);
        }

        Ok(PagedCollection {
            items_per_page: events.len() as u32,
            total_items: total,
            member: events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn honors_query_limit() {
        let client = FixtureSearchClient::new();
        let collection = client
            .search_events(&SearchQuery::new(true).with_limit(2))
            .await
            .unwrap();

        assert_eq!(collection.items().len(), 2);
        assert!(collection.total_items >= 2);
    }

    #[tokio::test]
    async fn unlimited_query_returns_all_fixtures() {
        let client = FixtureSearchClient::new();
        let collection = client
            .search_events(&SearchQuery::new(true))
            .await
            .unwrap();

        assert_eq!(collection.items().len() as u32, collection.total_items);
    }
}
