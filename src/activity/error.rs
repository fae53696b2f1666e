/// Failure modes of the activity directory

use thiserror::Error;

/// Errors surfaced to callers of `ActivityDirectoryService`
///
/// The display strings double as the `detail` field of HTTP error bodies.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already registered for this activity")]
    AlreadyRegistered,

    #[error("Student not registered for this activity")]
    NotRegistered,

    /// Checks passed but the store reported the append had no effect
    #[error("Failed to sign up for activity")]
    SignupFailed,

    /// Checks passed but the store reported the removal had no effect
    #[error("Failed to unregister from activity")]
    UnregisterFailed,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type ActivityResult<T> = Result<T, ActivityError>;
