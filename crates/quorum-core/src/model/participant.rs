use serde::{Deserialize, Serialize};

/// A voter attached to one decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    /// The chosen option label, or `None` for an abstention.
    pub vote: Option<String>,
    pub comment: Option<String>,
}

impl Participant {
    /// Placeholder display name for the participant joining after `existing` others.
    pub fn placeholder_name(existing: usize) -> String {
        format!("User {}", existing + 1)
    }

    pub fn has_voted(&self) -> bool {
        self.vote.is_some()
    }
}
