use anyhow::{Context, Result};
use chrono::Utc;
use quorum_core::due_date::compose_due;
use quorum_core::NewDecision;

pub fn run(
    topic: String,
    description: String,
    options: Vec<String>,
    due: Option<String>,
    time: Option<String>,
    json: bool,
) -> Result<()> {
    let options: Vec<String> = options.into_iter().filter(|o| !o.trim().is_empty()).collect();
    if options.is_empty() {
        anyhow::bail!("at least one non-blank --option is required");
    }
    let due_date =
        compose_due(due.as_deref(), time.as_deref(), Utc::now()).context("invalid deadline")?;
    let ws = super::discover()?;

    let decision = ws.decisions.create(NewDecision {
        topic,
        description,
        options,
        due_date,
        participants: Vec::new(),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
    } else {
        println!("Created decision {}", decision.id);
    }
    Ok(())
}
