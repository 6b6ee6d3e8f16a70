//! Centralized configuration for Billboard.
//!
//! All tunable parameters are defined here to avoid hard-coded values
//! scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Billboard components.
///
/// Groups related settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct BillboardConfig {
    /// Search API client settings.
    pub search: SearchConfig,
    /// Content-block rendering settings.
    pub content: ContentConfig,
}

/// Event search API configuration.
///
/// Controls where search requests go and how the HTTP client behaves.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the event search API.
    pub base_url: String,
    /// API key sent with every request, if the deployment requires one.
    pub api_key: Option<String>,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// User agent for HTTP requests.
    pub user_agent: &'static str,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(10),
            user_agent: "billboard/0.1.0",
        }
    }
}

/// Content-block rendering configuration.
///
/// Controls the defaults applied when a block request leaves a field
/// unspecified, and how long rendered blocks may be cached.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// View mode used when a request carries none.
    pub default_view_mode: String,
    /// Result limit used when a request carries none.
    pub default_limit: usize,
    /// How long a successfully rendered block may be reused.
    pub cache_max_age: Duration,
    /// Site-local path of the full event listing.
    pub all_events_path: String,
    /// Label of the generated more-link.
    pub more_link_text: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_view_mode: "teaser".to_string(),
            default_limit: 10,
            cache_max_age: Duration::from_secs(7200), // 2 hours
            all_events_path: "/agenda".to_string(),
            more_link_text: "Show all events".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_max_age_is_two_hours() {
        let config = ContentConfig::default();
        assert_eq!(config.cache_max_age, Duration::from_secs(7200));
    }

    #[test]
    fn default_search_config_has_no_api_key() {
        let config = SearchConfig::default();
        assert!(config.api_key.is_none());
        assert!(!config.base_url.is_empty());
    }
}
