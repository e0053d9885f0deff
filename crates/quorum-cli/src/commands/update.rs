use anyhow::{Context, Result};
use chrono::Utc;
use quorum_core::due_date::compose_due;
use quorum_core::DecisionPatch;

pub fn run(
    id: String,
    topic: Option<String>,
    description: Option<String>,
    due: Option<String>,
    time: Option<String>,
    json: bool,
) -> Result<()> {
    let due_date = due
        .as_deref()
        .map(|d| compose_due(Some(d), time.as_deref(), Utc::now()))
        .transpose()
        .context("invalid deadline")?;

    let patch = DecisionPatch {
        topic,
        description,
        due_date,
        ..Default::default()
    };
    if patch.is_empty() {
        anyhow::bail!("nothing to update: pass --topic, --description or --due");
    }

    let ws = super::discover()?;
    let decision = ws
        .decisions
        .update(&id, patch)?
        .ok_or_else(|| super::not_found(&id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
    } else {
        println!("Updated decision {}", decision.id);
    }
    Ok(())
}
