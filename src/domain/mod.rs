//! Domain models for the chat backend.
//!
//! Value objects validate their invariants at construction; entities carry
//! no behavior beyond what the use cases need. The repository traits live
//! here as well so the use case layer never depends on a concrete store
//! (dependency inversion, see `repository`).

mod message;
mod participant;
mod repository;

pub use message::{BROADCAST_TARGET, ChatMessage, JOINED_TEXT, LEFT_TEXT, MessageKind, MessageText};
pub use participant::{Participant, ParticipantName};
pub use repository::{MessageRepository, ParticipantRepository, RepositoryError};

#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from milliseconds
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub fn value(&self) -> i64 {
        self.0
    }
}
