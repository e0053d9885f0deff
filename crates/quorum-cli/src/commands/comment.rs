use anyhow::Result;
use quorum_store::config::AUTHOR_ENV;
use std::env;

pub fn run(id: String, message: String, author: Option<String>, json: bool) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("message cannot be empty");
    }
    let ws = super::discover()?;
    let author = ws.config.resolve_author(author, env::var(AUTHOR_ENV).ok());

    let decision = ws
        .decisions
        .add_message(&id, &author, &message)?
        .ok_or_else(|| super::not_found(&id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
    } else {
        println!(
            "{} posted to decision {} ({} messages)",
            author,
            decision.id,
            decision.discussion.len()
        );
    }
    Ok(())
}
