//! Billboard Core - Configuration and shared plumbing
//!
//! Central configuration for all Billboard components and the tracing
//! setup shared by the CLI and the web server.

#![deny(missing_docs)]
#![warn(clippy::missing_errors_doc)]

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{BillboardConfig, ContentConfig, SearchConfig};
pub use tracing_setup::{CliLogLevel, init_tracing};
