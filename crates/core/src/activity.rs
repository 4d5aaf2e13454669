// Activity domain types
//
// These types represent an extracurricular activity and its roster.
// Used by both the directory implementations and the API crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Full directory snapshot, keyed by activity name.
/// Keys are ordered so the JSON listing is stable between calls.
pub type Activities = BTreeMap<String, Activity>;

/// An extracurricular activity with a fixed capacity and a signup roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Activity {
    /// What the activity is about.
    #[cfg_attr(
        feature = "openapi",
        schema(example = "Learn strategies and compete in chess tournaments")
    )]
    pub description: String,
    /// When the activity meets, as free text.
    #[cfg_attr(feature = "openapi", schema(example = "Fridays, 3:30 PM - 5:00 PM"))]
    pub schedule: String,
    /// Maximum number of participants.
    #[cfg_attr(feature = "openapi", schema(example = 12, minimum = 1))]
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = json!(["michael@mergington.edu"])))]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding an initial roster.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Exact, case-sensitive match.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    /// Check the roster invariants: positive capacity, roster within capacity,
    /// and no email listed twice.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_participants == 0 {
            return Err("max_participants must be at least 1".to_string());
        }
        if self.participants.len() > self.max_participants as usize {
            return Err(format!(
                "{} participants exceed capacity of {}",
                self.participants.len(),
                self.max_participants
            ));
        }
        for (idx, email) in self.participants.iter().enumerate() {
            if self.participants[..idx].contains(email) {
                return Err(format!("{} is listed more than once", email));
            }
        }
        Ok(())
    }
}
