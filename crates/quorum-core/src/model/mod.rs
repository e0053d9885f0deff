pub mod decision;
pub mod message;
pub mod participant;

pub use decision::{Decision, DecisionPatch, DecisionStatus, NewDecision};
pub use message::Message;
pub use participant::Participant;
