/// HTTP API Layer
///
/// This module provides the REST API endpoints for the activity directory:
/// - Activity listing
/// - Student signup and unregister by email
/// - Landing page redirect

// Activity endpoints (GET/POST)
pub mod activities;

// Re-export router builder and state
pub use activities::{create_activity_routes, AppState};
