//! Billboard Content - Search-backed content blocks

#![deny(missing_docs)]
#![warn(clippy::missing_panics_doc)]
//!
//! Turns a search query plus display options into a display-ready content
//! block: delegates the query to the event search service, shapes the
//! results into a themed render structure with a "show more" link, and
//! attaches cache directives. Failures never propagate; a failed search
//! yields an empty, uncacheable block.

pub mod builder;
pub mod link;
pub mod render;

// Re-export main types
pub use builder::{ContentBlockBuilder, ContentBlockRequest, normalize_query};
pub use link::MoreLink;
pub use render::{CacheDirectives, ContentBlock, SEARCH_CACHE_TAG};
