//! Persistence for Quorum decisions.

pub mod config;
pub mod decision_store;
pub mod error;
pub mod lockfile;
pub mod query;
pub mod storage;
pub mod workspace;

pub use decision_store::{DecisionStore, DECISIONS_KEY};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, PendingWrite, Storage};
pub use workspace::Workspace;
