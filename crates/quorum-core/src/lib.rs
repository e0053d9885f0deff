//! Domain types for Quorum group decisions.
//!
//! Everything here is pure: no storage, no I/O. The store crate persists
//! these types and the CLI renders them.

pub mod clock;
pub mod due_date;
pub mod error;
pub mod ids;
pub mod model;
pub mod seed;
pub mod tally;

pub use error::CoreError;
pub use model::{Decision, DecisionPatch, DecisionStatus, Message, NewDecision, Participant};
