// Startup seed for the activity directory
//
// The built-in set mirrors the Mergington High School catalogue. A JSON file
// with the same shape (name -> activity) can replace it at startup.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::activity::{Activities, Activity};

/// Built-in activities the server starts with when no seed file is configured
pub fn default_activities() -> Activities {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Parse a seed document and check every record's roster invariants
pub fn parse(json: &str) -> Result<Activities> {
    let activities: Activities =
        serde_json::from_str(json).context("Seed must be a JSON object of name -> activity")?;

    for (name, activity) in &activities {
        if name.is_empty() {
            bail!("Seed contains an activity with an empty name");
        }
        if let Err(reason) = activity.validate() {
            bail!("Invalid seed activity '{}': {}", name, reason);
        }
    }

    Ok(activities)
}

/// Load and validate a seed file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Activities> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let activities =
        parse(&contents).with_context(|| format!("Failed to load seed file {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        count = activities.len(),
        "Loaded activity seed file"
    );
    Ok(activities)
}
