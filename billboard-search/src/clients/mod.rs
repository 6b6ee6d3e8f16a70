//! Client implementations for the event search API.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::query::SearchQuery;
use crate::types::PagedCollection;

pub mod fixture;
pub mod http;

pub use fixture::FixtureSearchClient;
pub use http::HttpSearchClient;

/// Trait for event search clients.
///
/// Implementations provide event search through different backends (the
/// production HTTP API, fixture data for development, test doubles).
#[async_trait]
pub trait SearchClient: Send + Sync + std::fmt::Debug {
    /// Execute an event search.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - Search operation failed
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response body could not be decoded
    async fn search_events(&self, query: &SearchQuery) -> Result<PagedCollection, SearchError>;
}
