/// Activity Directory Layer
///
/// Everything about extracurricular activities and who is enrolled in them:
/// - Record types and the built-in seed catalog
/// - The repository seam with SQLite and in-memory implementations
/// - The directory service enforcing enrollment rules

// Record type definitions
pub mod types;

// Fixed catalog used for startup seeding
pub mod catalog;

// Error taxonomy shared by the service and the HTTP layer
pub mod error;

// Repository trait and lock-free in-memory implementation
pub mod repository;

// SQLite persistence with sqlx
pub mod storage;

// Enrollment rules over an injected repository
pub mod service;

// Re-export commonly used types
pub use error::{ActivityError, ActivityResult};
pub use repository::{ActivityRepository, InMemoryActivityRepository};
pub use service::ActivityDirectoryService;
pub use storage::SqliteActivityStorage;
pub use types::{Activity, ActivityMap};
