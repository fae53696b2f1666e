/// Activity record definitions
///
/// These types are serialized as-is on the wire: the `/activities` listing is a
/// JSON object keyed by activity name whose values are `Activity` records.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single extracurricular offering
///
/// The activity name is not part of the record; it is the key under which the
/// record is stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Free-text description shown on the landing page
    pub description: String,
    /// Human-readable meeting times (e.g., "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,
    /// Advisory capacity, displayed but never enforced
    pub max_participants: u32,
    /// Enrolled student emails in signup order, no duplicates
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether `email` is currently enrolled
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activity name -> record, as returned by listings and used for seeding
pub type ActivityMap = BTreeMap<String, Activity>;
