//! Billboard Search - Event search client

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Client-side access to the remote event search API: a query model that
//! serializes to the API's URL parameters, response types, and pluggable
//! clients (HTTP for production, fixture data for development).

pub mod clients;
pub mod errors;
pub mod query;
pub mod service;
pub mod types;

// Re-export main types
pub use clients::{FixtureSearchClient, HttpSearchClient, SearchClient};
pub use errors::SearchError;
pub use query::{AudienceType, SearchQuery, SortDirection};
pub use service::EventSearchService;
pub use types::{Event, PagedCollection};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
