/// Mergington: extracurricular activity signup service
///
/// This library provides the activity directory (catalog seeding, listing and
/// enrollment), its SQLite store, and the HTTP routes that expose it.

// Core configuration and setup
pub mod config;

// Activity directory layer - records, repositories, enrollment rules
pub mod activity;

// HTTP API layer - REST endpoints for listing and enrollment
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use activity::{Activity, ActivityDirectoryService, ActivityError, ActivityRepository};
pub use server::{build_router, create_app, start_server};
