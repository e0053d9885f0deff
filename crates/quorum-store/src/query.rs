//! Query functions for filtering decisions

use quorum_core::clock::Clock;
use quorum_core::model::{Decision, DecisionStatus};

use crate::decision_store::DecisionStore;
use crate::error::StoreError;
use crate::storage::Storage;

/// Decisions matching every given filter, in stored order.
///
/// `topic_contains` matches case-insensitively.
pub fn query_decisions<S: Storage, C: Clock>(
    store: &DecisionStore<S, C>,
    status: Option<DecisionStatus>,
    topic_contains: Option<&str>,
) -> Result<Vec<Decision>, StoreError> {
    let needle = topic_contains.map(str::to_lowercase);
    Ok(store
        .list()?
        .into_iter()
        .filter(|d| status.map_or(true, |s| d.status == s))
        .filter(|d| {
            needle
                .as_deref()
                .map_or(true, |n| d.topic.to_lowercase().contains(n))
        })
        .collect())
}
