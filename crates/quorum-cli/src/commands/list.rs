use anyhow::Result;
use quorum_core::DecisionStatus;
use quorum_store::query;

pub fn run(status: Option<String>, topic: Option<String>, json: bool) -> Result<()> {
    let status = status
        .map(|s| s.parse::<DecisionStatus>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let ws = super::discover()?;

    let results = query::query_decisions(&ws.decisions, status, topic.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching decisions found.");
        return Ok(());
    }

    for d in &results {
        println!(
            "{:<10} [{}] {} ({} participants, due {})",
            d.id,
            d.status,
            d.topic,
            d.participants.len(),
            d.due_date
        );
    }
    Ok(())
}
