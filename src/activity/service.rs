/// Activity Directory Service
///
/// Business rules for listing activities and managing enrollment. The store is
/// injected as an `ActivityRepository`, so the same service runs against SQLite
/// in production and the in-memory registry in tests.

use crate::activity::{
    catalog::default_catalog,
    error::{ActivityError, ActivityResult},
    repository::ActivityRepository,
    types::ActivityMap,
};
use std::sync::Arc;

/// Shared handle to the activity directory
#[derive(Clone)]
pub struct ActivityDirectoryService {
    repository: Arc<dyn ActivityRepository>,
}

impl ActivityDirectoryService {
    /// Create the service over an already-initialized repository
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// Replace all stored activities with the built-in catalog
    ///
    /// Invoked once by the hosting process before it starts serving. Any
    /// enrollment made since the last seed is discarded.
    pub async fn seed(&self) -> ActivityResult<()> {
        let catalog = default_catalog();
        self.repository.replace_all(&catalog).await?;
        tracing::info!("🌱 Seeded {} activities", catalog.len());
        Ok(())
    }

    /// Every activity with its current participants
    pub async fn list_activities(&self) -> ActivityResult<ActivityMap> {
        Ok(self.repository.list().await?)
    }

    /// Enroll `email` in `activity_name`
    ///
    /// The read only picks the error class; the append itself is conditional on
    /// the store side, so two racing signups for different emails both land and
    /// a racing duplicate is rejected rather than stored twice.
    pub async fn sign_up(&self, activity_name: &str, email: &str) -> ActivityResult<String> {
        let activity = self
            .repository
            .get(activity_name)
            .await?
            .ok_or(ActivityError::NotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadyRegistered);
        }

        if !self.repository.add_participant(activity_name, email).await? {
            tracing::error!("Signup of {} for '{}' had no effect", email, activity_name);
            return Err(ActivityError::SignupFailed);
        }

        tracing::info!("✅ Signed up {} for '{}'", email, activity_name);
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Withdraw `email` from `activity_name`
    pub async fn unregister(&self, activity_name: &str, email: &str) -> ActivityResult<String> {
        let activity = self
            .repository
            .get(activity_name)
            .await?
            .ok_or(ActivityError::NotFound)?;

        if !activity.has_participant(email) {
            return Err(ActivityError::NotRegistered);
        }

        if !self.repository.remove_participant(activity_name, email).await? {
            tracing::error!("Unregister of {} from '{}' had no effect", email, activity_name);
            return Err(ActivityError::UnregisterFailed);
        }

        tracing::info!("🗑️ Unregistered {} from '{}'", email, activity_name);
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
