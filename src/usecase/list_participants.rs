//! UseCase: list current participants.

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository, RepositoryError};

pub struct ListParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// All current participants, order unspecified.
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.participants.list_all().await
    }
}
