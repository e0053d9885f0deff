//! The fixed dataset written into empty storage.

use crate::model::{Decision, DecisionStatus, Message, Participant};

fn voters(votes: &[(&str, &str, Option<&str>)]) -> Vec<Participant> {
    votes
        .iter()
        .zip(1u64..)
        .map(|(&(name, vote, comment), id)| Participant {
            id,
            name: name.into(),
            vote: Some(vote.into()),
            comment: comment.map(String::from),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn decision(
    id: &str,
    topic: &str,
    description: &str,
    options: [&str; 3],
    due_date: &str,
    status: DecisionStatus,
    participants: Vec<Participant>,
    discussion: Vec<Message>,
) -> Decision {
    Decision {
        id: id.into(),
        topic: topic.into(),
        description: description.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        due_date: due_date.into(),
        status,
        participants,
        discussion,
    }
}

pub fn seed_decisions() -> Vec<Decision> {
    let lunch = ["Pizza Place", "Sushi Bar", "Salad Spot"];
    let names = ["Project Phoenix", "Operation Sunrise", "Initiative Alpha"];
    let trip = ["Beach Resort", "Mountain Retreat", "City Exploration"];
    let team = ["Team Alpha", "The Innovators", "Project X"];

    vec![
        decision(
            "0",
            "Team Lunch Venue",
            "Choose a venue for the team lunch.",
            lunch,
            "2023-11-15",
            DecisionStatus::Finalized,
            voters(&[
                ("Alice", lunch[0], None),
                ("Bob", lunch[0], None),
                ("Charlie", lunch[0], None),
                ("Diana", lunch[0], None),
                ("Eve", lunch[0], None),
                ("Frank", lunch[0], None),
                ("Grace", lunch[1], None),
                ("Henry", lunch[1], None),
                ("Ivy", lunch[1], None),
                ("Jack", lunch[2], None),
            ]),
            vec![],
        ),
        decision(
            "1",
            "New Project Name",
            "Choose a name for the new project.",
            names,
            "2023-11-10",
            DecisionStatus::Finalized,
            voters(&[
                ("Alice", names[0], None),
                ("Bob", names[0], None),
                ("Charlie", names[0], None),
                ("Diana", names[0], None),
                ("Eve", names[1], None),
                ("Frank", names[1], None),
                ("Grace", names[2], None),
            ]),
            vec![],
        ),
        decision(
            "2",
            "Weekend Trip Destination",
            "We need to decide where to go for our team-building weekend trip.",
            trip,
            "2023-12-01",
            DecisionStatus::Active,
            voters(&[
                ("Alice", trip[0], Some("I love the beach!")),
                ("Bob", trip[1], Some("Mountains are more relaxing.")),
                ("Charlie", trip[2], Some("Let's explore a new city!")),
                ("Diana", trip[0], Some("Beach is perfect for team activities.")),
            ]),
            vec![
                Message {
                    id: 1,
                    author: "Alice".into(),
                    message: "Has anyone checked the weather forecast?".into(),
                    time: "2 hours ago".into(),
                },
                Message {
                    id: 2,
                    author: "Bob".into(),
                    message: "Mountain weather looks perfect next weekend!".into(),
                    time: "1 hour ago".into(),
                },
                Message {
                    id: 3,
                    author: "Charlie".into(),
                    message: "We should consider transportation costs too.".into(),
                    time: "30 minutes ago".into(),
                },
            ],
        ),
        decision(
            "3",
            "Project Team Name",
            "We need to choose a name for our new project team.",
            team,
            "2023-11-30",
            DecisionStatus::Active,
            voters(&[
                ("Frank", team[0], Some("Sounds professional.")),
                ("Grace", team[1], Some("Reflects our creative spirit.")),
                ("Henry", team[2], Some("Mysterious and cool!")),
                ("Ivy", team[0], Some("Simple and effective.")),
                ("Jack", team[1], Some("Emphasizes our innovative approach.")),
            ]),
            vec![],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::VoteBreakdown;

    #[test]
    fn four_decisions_two_of_each_status() {
        let seed = seed_decisions();
        assert_eq!(seed.len(), 4);
        let ids: Vec<_> = seed.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "3"]);
        assert_eq!(seed.iter().filter(|d| d.is_active()).count(), 2);
    }

    #[test]
    fn participant_counts() {
        let counts: Vec<_> = seed_decisions().iter().map(|d| d.participants.len()).collect();
        assert_eq!(counts, [10, 7, 4, 5]);
    }

    #[test]
    fn lunch_winner_is_pizza() {
        let seed = seed_decisions();
        let b = VoteBreakdown::of(&seed[0]);
        assert_eq!(b.leading().unwrap().option, "Pizza Place");
        assert_eq!(b.options[0].votes, 6);
    }

    #[test]
    fn trip_has_discussion() {
        let seed = seed_decisions();
        assert_eq!(seed[2].discussion.len(), 3);
        assert_eq!(seed[2].next_message_id(), 4);
        assert_eq!(seed[2].next_participant_id(), 5);
    }
}
