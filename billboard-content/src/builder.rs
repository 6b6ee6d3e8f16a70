//! Content block builder.
//!
//! The one public operation of this crate: normalize the raw query,
//! resolve the more-link, delegate the search, and shape the results into
//! a [`ContentBlock`]. Both failure points degrade locally - an invalid
//! custom link yields no link, a failed search yields an uncacheable
//! block - so the caller always receives a renderable payload.

use billboard_core::config::ContentConfig;
use billboard_search::{AudienceType, EventSearchService, SearchQuery, SortDirection};

use crate::link::MoreLink;
use crate::render::{CONTENT_BLOCK_THEME, CacheDirectives, ContentBlock};

/// Inbound parameters for a single content block.
#[derive(Debug, Clone)]
pub struct ContentBlockRequest {
    /// Title to display.
    pub title: String,
    /// Raw comma-separated search query.
    pub query: String,
    /// View mode of the items to display; empty selects the configured
    /// default.
    pub view_mode: String,
    /// Maximum number of items to display.
    pub limit: usize,
    /// Field to sort on.
    pub sort: Option<String>,
    /// Sorting direction.
    pub sort_direction: SortDirection,
    /// Use the generated all-events link instead of a custom one.
    pub default_more_link: bool,
    /// Custom more-link target, used when `default_more_link` is off.
    pub more_link: String,
}

impl Default for ContentBlockRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            query: String::new(),
            view_mode: String::new(),
            limit: 10,
            sort: None,
            sort_direction: SortDirection::Desc,
            default_more_link: true,
            more_link: String::new(),
        }
    }
}

/// Builds display-ready content blocks from search results.
#[derive(Debug, Clone)]
pub struct ContentBlockBuilder {
    search: EventSearchService,
    config: ContentConfig,
}

impl ContentBlockBuilder {
    /// Creates a builder delegating to the given search service.
    pub fn new(search: EventSearchService, config: ContentConfig) -> Self {
        Self { search, config }
    }

    /// Builds a content block for the given request.
    ///
    /// Never fails: a search failure leaves the item list empty and forces
    /// the cache max-age to zero so the degraded block is not reused.
    pub async fn build(&self, request: ContentBlockRequest) -> ContentBlock {
        let query = normalize_query(&request.query);

        let more_link = if request.default_more_link {
            Some(MoreLink::to_all_events(
                self.config.more_link_text.clone(),
                &self.config.all_events_path,
                &query,
            ))
        } else {
            MoreLink::from_user_input(self.config.more_link_text.clone(), &request.more_link)
        };

        let view_mode = if request.view_mode.is_empty() {
            self.config.default_view_mode.clone()
        } else {
            request.view_mode
        };

        let mut block = ContentBlock {
            theme: CONTENT_BLOCK_THEME,
            items: Vec::new(),
            view_mode,
            title: request.title,
            more_link,
            cache: CacheDirectives::cacheable(self.config.cache_max_age),
        };

        // Limit 0 means "unspecified"; fall back to the configured default.
        let limit = if request.limit == 0 {
            self.config.default_limit
        } else {
            request.limit
        };

        let mut search_query = SearchQuery::new(true)
            .with_query(query)
            .with_audience(AudienceType::Everyone)
            .with_limit(limit);

        if let Some(field) = request.sort {
            search_query = search_query.with_sort(field, request.sort_direction);
        }

        match self.search.search_events(&search_query).await {
            Ok(results) => {
                if !results.is_empty() {
                    block.items = results.into_items();
                }
            }
            Err(error) => {
                tracing::warn!(%error, "event search failed, serving uncacheable content block");
                block.cache.expire();
            }
        }

        block
    }
}

/// Rewrites a comma-separated query into an AND-joined boolean expression.
///
/// `"a,b,c"` becomes `"(a AND b AND c)"`. A trailing separator is trimmed
/// before closing, whitespace around terms is dropped, and an empty input
/// stays empty.
pub fn normalize_query(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(',');
    if trimmed.is_empty() {
        return String::new();
    }

    let terms: Vec<&str> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect();

    format!("({})", terms.join(" AND "))
}
