use crate::error::CoreError;
use crate::model::{Message, Participant};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Active,
    Finalized,
}

impl DecisionStatus {
    /// Whether a record in this status may be written with status `next`.
    ///
    /// Voting can be closed but never reopened.
    pub fn can_become(self, next: DecisionStatus) -> bool {
        !matches!((self, next), (Self::Finalized, Self::Active))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DecisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "finalized" => Ok(Self::Finalized),
            other => Err(format!(
                "unknown status '{}': expected 'active' or 'finalized'",
                other
            )),
        }
    }
}

/// A topic with candidate options, a deadline, and accumulated votes and discussion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub topic: String,
    pub description: String,
    /// Option labels in display order. Duplicates are allowed.
    pub options: Vec<String>,
    pub due_date: String,
    pub status: DecisionStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub discussion: Vec<Message>,
}

/// Caller-supplied fields for a decision that has no identifier yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDecision {
    pub topic: String,
    pub description: String,
    pub options: Vec<String>,
    pub due_date: String,
    pub participants: Vec<Participant>,
}

impl NewDecision {
    pub fn into_decision(self, id: String) -> Decision {
        Decision {
            id,
            topic: self.topic,
            description: self.description,
            options: self.options,
            due_date: self.due_date,
            status: DecisionStatus::Active,
            participants: self.participants,
            discussion: Vec::new(),
        }
    }
}

/// A partial field set merged shallowly over an existing decision.
///
/// `None` leaves the field untouched; the identifier is never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionPatch {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<String>>,
    pub due_date: Option<String>,
    pub status: Option<DecisionStatus>,
    pub participants: Option<Vec<Participant>>,
    pub discussion: Option<Vec<Message>>,
}

impl DecisionPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Decision {
    /// Merge `patch` over this record.
    ///
    /// Fails without modifying anything if the patch would reopen a finalized decision.
    pub fn apply(&mut self, patch: DecisionPatch) -> Result<(), CoreError> {
        if let Some(next) = patch.status {
            if !self.status.can_become(next) {
                return Err(CoreError::InvalidTransition {
                    from: self.status,
                    to: next,
                });
            }
        }

        let DecisionPatch {
            topic,
            description,
            options,
            due_date,
            status,
            participants,
            discussion,
        } = patch;

        if let Some(v) = topic {
            self.topic = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = options {
            self.options = v;
        }
        if let Some(v) = due_date {
            self.due_date = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = participants {
            self.participants = v;
        }
        if let Some(v) = discussion {
            self.discussion = v;
        }
        Ok(())
    }

    /// Close voting. Only an active decision can be finalized.
    pub fn finalize(&mut self) -> Result<(), CoreError> {
        if self.status != DecisionStatus::Active {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to: DecisionStatus::Finalized,
            });
        }
        self.status = DecisionStatus::Finalized;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == DecisionStatus::Active
    }
}
