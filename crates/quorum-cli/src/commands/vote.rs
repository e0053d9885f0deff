use anyhow::Result;

pub fn run(id: String, option: String, comment: Option<String>, json: bool) -> Result<()> {
    let ws = super::discover()?;

    let current = ws.decisions.get(&id)?.ok_or_else(|| super::not_found(&id))?;
    if !current.is_active() {
        anyhow::bail!("decision '{}' is finalized; voting is closed", id);
    }
    if !current.options.contains(&option) {
        anyhow::bail!(
            "'{}' is not an option of decision {} (choose from: {})",
            option,
            id,
            current.options.join(", ")
        );
    }

    let comment = comment.filter(|c| !c.trim().is_empty());
    let decision = ws
        .decisions
        .add_vote(&id, &option, comment.as_deref())?
        .ok_or_else(|| super::not_found(&id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
    } else {
        println!(
            "Recorded vote for '{}' on decision {} ({} participants)",
            option,
            decision.id,
            decision.participants.len()
        );
    }
    Ok(())
}
