//! UseCase: poll the message log.

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageRepository, ParticipantName, ParticipantRepository};

use super::error::FetchMessagesError;

pub struct FetchMessagesUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl FetchMessagesUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// Messages visible to `user`, creation time ascending, capped to the
    /// earliest `limit` results. `None` means no cap.
    pub async fn execute(
        &self,
        user: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, FetchMessagesError> {
        let name = ParticipantName::new(user.to_string())
            .map_err(|_| FetchMessagesError::Unauthorized(user.to_string()))?;
        if self.participants.find_by_name(&name).await?.is_none() {
            return Err(FetchMessagesError::Unauthorized(user.to_string()));
        }

        Ok(self.messages.find_visible_to(&name, limit).await?)
    }
}
