//! Identifier generation.
//!
//! Decision ids are short random base-36 strings, redrawn until they are
//! unique within the collection. Participant and message ids are monotonic
//! within the owning decision.

use crate::model::Decision;
use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated decision id.
pub const DECISION_ID_LEN: usize = 9;

/// Draw one random base-36 decision id.
pub fn random_decision_id<R: Rng>(rng: &mut R) -> String {
    (0..DECISION_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draw decision ids until one does not collide with `existing`.
pub fn unique_decision_id<R: Rng>(rng: &mut R, existing: &[Decision]) -> String {
    loop {
        let candidate = random_decision_id(rng);
        if !existing.iter().any(|d| d.id == candidate) {
            return candidate;
        }
    }
}

/// [`unique_decision_id`] using the thread-local generator.
pub fn fresh_decision_id(existing: &[Decision]) -> String {
    unique_decision_id(&mut rand::thread_rng(), existing)
}

/// One past the largest id in `ids`, or 1 for an empty sequence.
pub fn next_sequence_id(ids: impl IntoIterator<Item = u64>) -> u64 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

impl Decision {
    pub fn next_participant_id(&self) -> u64 {
        next_sequence_id(self.participants.iter().map(|p| p.id))
    }

    pub fn next_message_id(&self) -> u64 {
        next_sequence_id(self.discussion.iter().map(|m| m.id))
    }
}
