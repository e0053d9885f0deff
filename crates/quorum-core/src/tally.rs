//! Vote breakdown over a decision's participants.

use crate::model::Decision;
use serde::Serialize;

/// Votes for a single option.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionTally {
    pub option: String,
    pub votes: usize,
    /// Share of cast votes, 0.0..=100.0. Abstentions are not counted.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VoteBreakdown {
    /// Participants who cast a vote.
    pub total_votes: usize,
    pub options: Vec<OptionTally>,
}

impl VoteBreakdown {
    pub fn of(decision: &Decision) -> Self {
        let total_votes = decision.participants.iter().filter(|p| p.has_voted()).count();
        let options = decision
            .options
            .iter()
            .map(|option| {
                let votes = decision
                    .participants
                    .iter()
                    .filter(|p| p.vote.as_deref() == Some(option.as_str()))
                    .count();
                let percentage = if total_votes > 0 {
                    votes as f64 / total_votes as f64 * 100.0
                } else {
                    0.0
                };
                OptionTally {
                    option: option.clone(),
                    votes,
                    percentage,
                }
            })
            .collect();
        Self {
            total_votes,
            options,
        }
    }

    /// The option with the most votes; the earlier option wins a tie.
    /// `None` when nobody has voted.
    pub fn leading(&self) -> Option<&OptionTally> {
        let mut best: Option<&OptionTally> = None;
        for tally in &self.options {
            if tally.votes == 0 {
                continue;
            }
            match best {
                Some(b) if b.votes >= tally.votes => {}
                _ => best = Some(tally),
            }
        }
        best
    }
}
