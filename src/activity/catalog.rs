/// Built-in activity catalog used to seed the store at startup

use crate::activity::types::{Activity, ActivityMap};

/// (name, description, schedule, max_participants, initial participants)
const CATALOG: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in local leagues",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        18,
        &[],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly matches",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        &[],
    ),
    (
        "Drama Club",
        "Act, direct, and participate in school theater productions",
        "Mondays, 4:00 PM - 5:30 PM",
        20,
        &[],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and sculpture techniques",
        "Fridays, 2:00 PM - 3:30 PM",
        16,
        &[],
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Thursdays, 3:30 PM - 5:00 PM",
        10,
        &[],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 4:00 PM - 5:00 PM",
        14,
        &[],
    ),
];

/// Build a fresh copy of the default catalog
pub fn default_catalog() -> ActivityMap {
    CATALOG
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
