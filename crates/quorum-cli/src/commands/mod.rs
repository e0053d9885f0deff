pub mod comment;
pub mod create;
pub mod finalize;
pub mod init;
pub mod list;
pub mod show;
pub mod update;
pub mod vote;

use anyhow::{Context, Result};
use quorum_core::tally::VoteBreakdown;
use quorum_core::Decision;
use quorum_store::Workspace;
use std::env;

/// Open the workspace containing the current directory.
fn discover() -> Result<Workspace> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    Workspace::discover(&cwd).context("not a Quorum workspace (run `quorum init`)")
}

fn not_found(id: &str) -> anyhow::Error {
    anyhow::anyhow!("decision '{}' not found", id)
}

/// JSON shape shared by commands that print a single decision.
fn decision_json(decision: &Decision) -> serde_json::Value {
    serde_json::json!({
        "decision": decision,
        "breakdown": VoteBreakdown::of(decision),
    })
}
