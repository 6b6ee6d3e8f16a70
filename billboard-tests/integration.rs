//! Integration tests for Billboard
//!
//! These tests verify the integration between different components of the
//! system: the content-block pipeline on top of scripted search clients,
//! the search service wiring, and the web API routes.

#[path = "integration/content_blocks.rs"]
mod content_blocks;

#[path = "integration/search_service.rs"]
mod search_service;

#[path = "integration/web_api.rs"]
mod web_api;
