/// Data-access seam for activity records
///
/// The service only talks to the store through `ActivityRepository`, so the
/// hosting process can inject SQLite while tests inject the in-memory registry.

use crate::activity::types::ActivityMap;
use crate::activity::Activity;
use anyhow::Result;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistent store of activity records keyed by name
///
/// Participant mutations are conditional and atomic on the store side: the
/// returned flag tells whether the stored record actually changed.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Drop every stored activity and insert `activities` in their place
    async fn replace_all(&self, activities: &ActivityMap) -> Result<()>;

    /// Every stored activity with its current participants
    async fn list(&self) -> Result<ActivityMap>;

    /// A single activity by name
    async fn get(&self, name: &str) -> Result<Option<Activity>>;

    /// Append `email` if the activity exists and does not already list it
    async fn add_participant(&self, name: &str, email: &str) -> Result<bool>;

    /// Remove `email` if the activity exists and lists it
    async fn remove_participant(&self, name: &str, email: &str) -> Result<bool>;
}

/// Lock-free in-memory repository
///
/// Every mutation clones the map and swaps it in with `ArcSwap::rcu`, which
/// retries on contention, so concurrent conditional updates never lose writes.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    activities: ArcSwap<ActivityMap>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn replace_all(&self, activities: &ActivityMap) -> Result<()> {
        self.activities.store(Arc::new(activities.clone()));
        Ok(())
    }

    async fn list(&self) -> Result<ActivityMap> {
        Ok((**self.activities.load()).clone())
    }

    async fn get(&self, name: &str) -> Result<Option<Activity>> {
        Ok(self.activities.load().get(name).cloned())
    }

    async fn add_participant(&self, name: &str, email: &str) -> Result<bool> {
        let previous = self.activities.rcu(|current| {
            let mut next = (**current).clone();
            if let Some(activity) = next.get_mut(name) {
                if !activity.has_participant(email) {
                    activity.participants.push(email.to_string());
                }
            }
            next
        });

        // `previous` is exactly the map our successful swap replaced
        Ok(previous
            .get(name)
            .is_some_and(|activity| !activity.has_participant(email)))
    }

    async fn remove_participant(&self, name: &str, email: &str) -> Result<bool> {
        let previous = self.activities.rcu(|current| {
            let mut next = (**current).clone();
            if let Some(activity) = next.get_mut(name) {
                activity.participants.retain(|p| p != email);
            }
            next
        });

        Ok(previous
            .get(name)
            .is_some_and(|activity| activity.has_participant(email)))
    }
}
