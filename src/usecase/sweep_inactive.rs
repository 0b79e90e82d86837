//! UseCase: one inactivity eviction pass.
//!
//! Finds participants whose heartbeat is older than the threshold, removes
//! each from the registry and appends a departure notice. Evictions fan out
//! independently: one participant's failure is recorded in the report and
//! never aborts the rest of the batch. Nothing is retried.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{
    ChatMessage, MessageRepository, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

/// Heartbeats older than this are considered stale (10 s)
pub const INACTIVITY_THRESHOLD_MILLIS: i64 = 10_000;

/// Outcome of one sweep pass
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Participants evicted with a departure notice appended
    pub evicted: Vec<ParticipantName>,
    /// Participants whose eviction failed; they will be retried naturally
    /// on the next pass if still stale
    pub failed: Vec<(ParticipantName, RepositoryError)>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.evicted.is_empty() && self.failed.is_empty()
    }
}

pub struct SweepInactiveUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    threshold_millis: i64,
}

impl SweepInactiveUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_threshold(participants, messages, clock, INACTIVITY_THRESHOLD_MILLIS)
    }

    pub fn with_threshold(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        threshold_millis: i64,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
            threshold_millis,
        }
    }

    /// Run one eviction pass.
    ///
    /// Fails only if the stale-participant query itself fails; individual
    /// eviction failures are collected in the report.
    pub async fn execute(&self) -> Result<SweepReport, RepositoryError> {
        let cutoff = Timestamp::new(self.clock.now_millis() - self.threshold_millis);
        let stale = self.participants.find_stale(cutoff).await?;

        let mut report = SweepReport::default();
        for participant in stale {
            let name = participant.name.clone();
            match self.evict(participant).await {
                Ok(()) => report.evicted.push(name),
                Err(err) => {
                    tracing::warn!("Failed to evict participant '{}': {}", name, err);
                    report.failed.push((name, err));
                }
            }
        }

        Ok(report)
    }

    /// Remove one participant and announce the departure. The two store
    /// operations are not atomic with each other.
    async fn evict(&self, participant: Participant) -> Result<(), RepositoryError> {
        self.participants.remove(&participant.name).await?;

        let left_at = Timestamp::new(self.clock.now_millis());
        self.messages
            .append(ChatMessage::left(participant.name, left_at))
            .await?;

        Ok(())
    }
}
