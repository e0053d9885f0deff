use crate::error::StoreError;
use crate::storage::{PendingWrite, Storage};
use quorum_core::clock::{Clock, SystemClock};
use quorum_core::ids::fresh_decision_id;
use quorum_core::model::{
    Decision, DecisionPatch, DecisionStatus, Message, NewDecision, Participant,
};
use quorum_core::seed::seed_decisions;
use quorum_core::CoreError;

/// Storage key holding the whole decision collection.
pub const DECISIONS_KEY: &str = "decisions";

/// Sole owner of the persisted decision collection.
///
/// The collection is one JSON array under [`DECISIONS_KEY`]. Every call reads
/// storage afresh; every mutation rewrites the whole array while holding the
/// backend's write lock, so concurrent mutators fail instead of losing updates.
pub struct DecisionStore<S, C = SystemClock> {
    storage: S,
    clock: C,
}

impl<S: Storage> DecisionStore<S> {
    /// Open a store over `storage`, seeding it if it is empty.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> DecisionStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Result<Self, StoreError> {
        let store = Self { storage, clock };
        store.initialize()?;
        Ok(store)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the seed dataset if no collection exists yet.
    ///
    /// Returns `true` if this call seeded. Unavailable storage is skipped silently.
    pub fn initialize(&self) -> Result<bool, StoreError> {
        match self.storage.get(DECISIONS_KEY) {
            Ok(Some(_)) => return Ok(false),
            Ok(None) => {}
            Err(StoreError::Unavailable(reason)) => {
                tracing::debug!(%reason, "storage unavailable, skipping seed");
                return Ok(false);
            }
            Err(e) => return Err(e),
        }

        let pending = self.storage.begin_write(DECISIONS_KEY)?;
        // Another writer may have seeded between the check and the lock.
        if self.storage.get(DECISIONS_KEY)?.is_some() {
            return Ok(false);
        }
        let seed = seed_decisions();
        Self::persist(pending, &seed)?;
        tracing::info!(count = seed.len(), "seeded decision storage");
        Ok(true)
    }

    /// Every decision in stored order. Empty when storage is unavailable.
    pub fn list(&self) -> Result<Vec<Decision>, StoreError> {
        match self.read_all() {
            Err(StoreError::Unavailable(reason)) => {
                tracing::debug!(%reason, "storage unavailable, listing nothing");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub fn get(&self, id: &str) -> Result<Option<Decision>, StoreError> {
        Ok(self.list()?.into_iter().find(|d| d.id == id))
    }

    /// Append a new active decision under a freshly generated identifier.
    pub fn create(&self, new: NewDecision) -> Result<Decision, StoreError> {
        let pending = self.storage.begin_write(DECISIONS_KEY)?;
        let mut decisions = self.read_all()?;
        let decision = new.into_decision(fresh_decision_id(&decisions));
        decisions.push(decision.clone());
        Self::persist(pending, &decisions)?;
        tracing::info!(id = %decision.id, topic = %decision.topic, "created decision");
        Ok(decision)
    }

    /// Shallow-merge `patch` over the decision `id`. `None` if there is no such decision.
    pub fn update(&self, id: &str, patch: DecisionPatch) -> Result<Option<Decision>, StoreError> {
        self.modify(id, |_| Ok(patch))
    }

    /// Append a discussion message stamped with the current time.
    pub fn add_message(
        &self,
        id: &str,
        author: &str,
        body: &str,
    ) -> Result<Option<Decision>, StoreError> {
        let time = Message::display_time(self.clock.now());
        self.modify(id, |current| {
            let mut discussion = current.discussion.clone();
            discussion.push(Message {
                id: current.next_message_id(),
                author: author.to_string(),
                message: body.to_string(),
                time,
            });
            Ok(DecisionPatch {
                discussion: Some(discussion),
                ..Default::default()
            })
        })
    }

    /// Record a vote from a new, placeholder-named participant.
    ///
    /// The option is not checked against the decision's options. A finalized
    /// decision rejects the vote with [`CoreError::Closed`].
    pub fn add_vote(
        &self,
        id: &str,
        option: &str,
        comment: Option<&str>,
    ) -> Result<Option<Decision>, StoreError> {
        self.modify(id, |current| {
            if !current.is_active() {
                return Err(CoreError::Closed(current.id.clone()).into());
            }
            let mut participants = current.participants.clone();
            participants.push(Participant {
                id: current.next_participant_id(),
                name: Participant::placeholder_name(current.participants.len()),
                vote: Some(option.to_string()),
                comment: comment.map(String::from),
            });
            Ok(DecisionPatch {
                participants: Some(participants),
                ..Default::default()
            })
        })
    }

    /// Close voting on an active decision.
    pub fn finalize(&self, id: &str) -> Result<Option<Decision>, StoreError> {
        self.modify(id, |current| {
            if current.status != DecisionStatus::Active {
                return Err(CoreError::InvalidTransition {
                    from: current.status,
                    to: DecisionStatus::Finalized,
                }
                .into());
            }
            Ok(DecisionPatch {
                status: Some(DecisionStatus::Finalized),
                ..Default::default()
            })
        })
    }

    /// Locked read-modify-write of one decision. The lock is released without
    /// writing when the decision is missing or `build` fails.
    fn modify<F>(&self, id: &str, build: F) -> Result<Option<Decision>, StoreError>
    where
        F: FnOnce(&Decision) -> Result<DecisionPatch, StoreError>,
    {
        let pending = self.storage.begin_write(DECISIONS_KEY)?;
        let mut decisions = self.read_all()?;
        let Some(index) = decisions.iter().position(|d| d.id == id) else {
            tracing::debug!(%id, "decision not found");
            return Ok(None);
        };

        let patch = build(&decisions[index])?;
        decisions[index].apply(patch)?;
        let updated = decisions[index].clone();
        Self::persist(pending, &decisions)?;
        tracing::debug!(%id, "updated decision");
        Ok(Some(updated))
    }

    fn read_all(&self) -> Result<Vec<Decision>, StoreError> {
        match self.storage.get(DECISIONS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(pending: Box<dyn PendingWrite + '_>, decisions: &[Decision]) -> Result<(), StoreError> {
        let json = serde_json::to_string(decisions)?;
        pending.commit(&json)
    }
}
