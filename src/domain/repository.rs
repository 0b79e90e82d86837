//! Repository traits required by the domain.
//!
//! The use case layer depends on these traits only; the infrastructure
//! layer provides the concrete store (dependency inversion). The backing
//! store guarantees per-operation atomicity and nothing more: there are no
//! multi-operation transactions, so sequences such as "insert participant +
//! append join notice" can be observed partially applied.

use async_trait::async_trait;
use thiserror::Error;

use super::{ChatMessage, Participant, ParticipantName, Timestamp};

/// Error raised by a repository operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),
    #[error("participant '{0}' already exists")]
    DuplicateParticipant(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Registry of connected participants, keyed by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Insert a new participant. Fails with [`RepositoryError::DuplicateParticipant`]
    /// if the name is already taken.
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Look up a participant by name.
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// List all current participants, order unspecified.
    async fn list_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Refresh a participant's heartbeat timestamp. Fails with
    /// [`RepositoryError::ParticipantNotFound`] if the name is absent.
    async fn update_last_status(
        &self,
        name: &ParticipantName,
        last_status: Timestamp,
    ) -> Result<(), RepositoryError>;

    /// Remove a participant. Removing an absent name is a no-op.
    async fn remove(&self, name: &ParticipantName) -> Result<(), RepositoryError>;

    /// List participants whose heartbeat is strictly older than `cutoff`.
    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;
}

/// Append-only message log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to the log.
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// Messages visible to `user` (see [`ChatMessage::visible_to`]), ordered
    /// by creation time ascending. `limit` caps the result to the earliest
    /// N messages; `None` returns everything.
    async fn find_visible_to(
        &self,
        user: &ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, RepositoryError>;
}
