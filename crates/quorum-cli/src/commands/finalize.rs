use anyhow::{Context, Result};
use quorum_core::tally::VoteBreakdown;

pub fn run(id: String, json: bool) -> Result<()> {
    let ws = super::discover()?;
    let decision = ws
        .decisions
        .finalize(&id)
        .context(format!("cannot finalize decision '{}'", id))?
        .ok_or_else(|| super::not_found(&id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
        return Ok(());
    }

    match VoteBreakdown::of(&decision).leading() {
        Some(lead) => println!("Finalized decision {}: {}", decision.id, lead.option),
        None => println!("Finalized decision {} (no votes cast)", decision.id),
    }
    Ok(())
}
