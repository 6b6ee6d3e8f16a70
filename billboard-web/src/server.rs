//! Web server wiring for Billboard.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Instant;

use axum::Router;
use axum::routing::get;
use billboard_content::ContentBlockBuilder;
use billboard_core::config::BillboardConfig;
use billboard_search::EventSearchService;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::handlers::{api_content_block, api_search, health};

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content block builder.
    pub builder: ContentBlockBuilder,
    /// Raw search access for the passthrough endpoint.
    pub search: EventSearchService,
    /// Server start time, for the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// State backed by the production HTTP search client.
    pub fn new(config: &BillboardConfig) -> Self {
        Self::with_service(EventSearchService::new(&config.search), config)
    }

    /// State backed by canned fixture data, for demo mode.
    pub fn new_fixture(config: &BillboardConfig) -> Self {
        Self::with_service(EventSearchService::new_fixture(), config)
    }

    /// State with an injected search service.
    pub fn with_service(search: EventSearchService, config: &BillboardConfig) -> Self {
        Self {
            builder: ContentBlockBuilder::new(search.clone(), config.content.clone()),
            search,
            started_at: Instant::now(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Address the server binds to.
    pub bind_address: SocketAddr,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000)),
        }
    }
}

/// Errors raised while starting or running the web server.
#[derive(Debug, Error)]
pub enum WebServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// The address that could not be bound
        address: SocketAddr,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/content-block", get(api_content_block))
        .route("/api/search", get(api_search))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listen address and serves requests until shutdown.
///
/// # Errors
/// - `WebServerError::Bind` - The listen address could not be bound
/// - `WebServerError::Serve` - The server stopped with an I/O error
pub async fn run_server(config: WebServerConfig, state: AppState) -> Result<(), WebServerError> {
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| WebServerError::Bind {
            address: config.bind_address,
            source,
        })?;

    tracing::info!(address = %config.bind_address, "web server listening");

    axum::serve(listener, router(state))
        .await
        .map_err(WebServerError::Serve)
}
