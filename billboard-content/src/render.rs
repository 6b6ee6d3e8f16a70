//! Render structure for content blocks.

use std::time::Duration;

use billboard_search::Event;
use serde::Serialize;

use crate::link::MoreLink;

/// Theme identifier attached to every content block.
pub const CONTENT_BLOCK_THEME: &str = "content_block";

/// Cache tag shared by all search-derived content, so a reindex can
/// invalidate every rendered block at once.
pub const SEARCH_CACHE_TAG: &str = "event_search";

/// Display-ready payload for a list of search results.
///
/// The structure a theming layer turns into markup: resolved items, the
/// view mode to render them in, a title, an optional more-link, and the
/// cache directives governing reuse.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    /// Theme hook the payload is rendered through.
    pub theme: &'static str,
    /// Resolved events.
    pub items: Vec<Event>,
    /// View mode the items are rendered in.
    pub view_mode: String,
    /// Block title.
    pub title: String,
    /// Link to the full result set, when one could be resolved.
    pub more_link: Option<MoreLink>,
    /// Cache directives for the rendered payload.
    pub cache: CacheDirectives,
}

/// Cache directives attached to a rendered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDirectives {
    /// Invalidation tags.
    pub tags: Vec<String>,
    /// Seconds the payload may be reused before recomputation.
    pub max_age: u64,
}

impl CacheDirectives {
    /// Directives for a successfully rendered block.
    pub fn cacheable(max_age: Duration) -> Self {
        Self {
            tags: vec![SEARCH_CACHE_TAG.to_string()],
            max_age: max_age.as_secs(),
        }
    }

    /// Forces the payload out of cache consideration.
    pub fn expire(&mut self) {
        self.max_age = 0;
    }

    /// Whether the payload may be cached at all.
    pub fn is_cacheable(&self) -> bool {
        self.max_age > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cacheable_directives_carry_search_tag() {
        let cache = CacheDirectives::cacheable(Duration::from_secs(7200));
        assert_eq!(cache.tags, vec![SEARCH_CACHE_TAG.to_string()]);
        assert_eq!(cache.max_age, 7200);
        assert!(cache.is_cacheable());
    }

    #[test]
    fn expired_directives_are_uncacheable() {
        let mut cache = CacheDirectives::cacheable(Duration::from_secs(7200));
        cache.expire();
        assert_eq!(cache.max_age, 0);
        assert!(!cache.is_cacheable());
    }
}
