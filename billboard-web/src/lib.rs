//! Billboard Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
//!
//! JSON API over the content-block builder and the raw event search.
//! The builder's cache directives are translated to `Cache-Control`
//! headers so an HTTP cache in front of the server honors them.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, WebServerConfig, WebServerError, router, run_server};
