use thiserror::Error;

use crate::model::DecisionStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot move decision from {from} to {to}")]
    InvalidTransition {
        from: DecisionStatus,
        to: DecisionStatus,
    },

    #[error("decision {0} is finalized and no longer accepts votes")]
    Closed(String),

    #[error("invalid due date '{input}': {reason}")]
    InvalidDueDate { input: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
