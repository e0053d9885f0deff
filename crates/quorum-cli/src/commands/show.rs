use anyhow::Result;
use quorum_core::tally::VoteBreakdown;

pub fn run(id: String, json: bool) -> Result<()> {
    let ws = super::discover()?;
    let decision = ws.decisions.get(&id)?.ok_or_else(|| super::not_found(&id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&super::decision_json(&decision))?);
        return Ok(());
    }

    let breakdown = VoteBreakdown::of(&decision);

    println!("decision {} [{}]", decision.id, decision.status);
    println!("Topic: {}", decision.topic);
    println!("Due:   {}", decision.due_date);
    if !decision.description.is_empty() {
        println!();
        println!("    {}", decision.description);
    }

    println!();
    println!("Vote breakdown ({} participants):", decision.participants.len());
    let width = decision.options.iter().map(|o| o.chars().count()).max().unwrap_or(0);
    for tally in &breakdown.options {
        println!(
            "  {:<width$}  {} votes ({:.1}%)",
            tally.option,
            tally.votes,
            tally.percentage,
            width = width
        );
    }
    if let Some(lead) = breakdown.leading() {
        let label = if decision.is_active() { "Leading" } else { "Final" };
        println!("{}: {}", label, lead.option);
    }

    if !decision.participants.is_empty() {
        println!();
        println!("Participants:");
        for p in &decision.participants {
            let vote = p.vote.as_deref().unwrap_or("(no vote)");
            match &p.comment {
                Some(c) if !c.is_empty() => println!("  {}: {} ({})", p.name, vote, c),
                _ => println!("  {}: {}", p.name, vote),
            }
        }
    }

    if !decision.discussion.is_empty() {
        println!();
        println!("Discussion:");
        for m in &decision.discussion {
            println!("  [{}] {}: {}", m.time, m.author, m.message);
        }
    }

    Ok(())
}
