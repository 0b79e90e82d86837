//! UseCase: participant registration.
//!
//! Registers a name in the registry and announces the arrival with a
//! `status` message. The two inserts are separate store operations and are
//! not atomic with each other.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{
    ChatMessage, MessageRepository, Participant, ParticipantName, ParticipantRepository, Timestamp,
};

use super::error::RegisterError;

pub struct RegisterParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
        }
    }

    /// Register a participant.
    ///
    /// The duplicate check runs before field validation when a name is
    /// present, matching the original handler order. On success the
    /// registry gains one participant and the log gains one join notice.
    pub async fn execute(&self, name: Option<String>) -> Result<(), RegisterError> {
        // 1. Conflict check (only a valid name can collide)
        if let Some(raw) = name.as_deref() {
            if let Ok(candidate) = ParticipantName::new(raw.to_string()) {
                if self.participants.find_by_name(&candidate).await?.is_some() {
                    return Err(RegisterError::NameTaken(raw.to_string()));
                }
            }
        }

        // 2. Field validation
        let name = match name {
            None => {
                return Err(RegisterError::Validation(vec![
                    "\"name\" is required".to_string(),
                ]));
            }
            Some(raw) => ParticipantName::new(raw).map_err(|_| {
                RegisterError::Validation(vec![
                    "\"name\" is not allowed to be empty".to_string(),
                ])
            })?,
        };

        // 3. Insert the participant, then announce the arrival
        let now = Timestamp::new(self.clock.now_millis());
        self.participants
            .insert(Participant::new(name.clone(), now))
            .await
            .map_err(|err| match err {
                crate::domain::RepositoryError::DuplicateParticipant(taken) => {
                    RegisterError::NameTaken(taken)
                }
                other => RegisterError::Repository(other),
            })?;

        self.messages.append(ChatMessage::joined(name, now)).await?;

        Ok(())
    }
}
