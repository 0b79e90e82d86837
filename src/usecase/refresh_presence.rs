//! UseCase: heartbeat (`POST /status`).
//!
//! Refreshes a participant's `last_status` so the inactivity sweep keeps
//! them alive.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{ParticipantName, ParticipantRepository, Timestamp};

use super::error::RefreshPresenceError;

pub struct RefreshPresenceUseCase {
    participants: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
}

impl RefreshPresenceUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            participants,
            clock,
        }
    }

    /// Set `last_status = now` for the named participant.
    pub async fn execute(&self, user: &str) -> Result<(), RefreshPresenceError> {
        let name = ParticipantName::new(user.to_string())
            .map_err(|_| RefreshPresenceError::NotFound(user.to_string()))?;

        if self.participants.find_by_name(&name).await?.is_none() {
            return Err(RefreshPresenceError::NotFound(user.to_string()));
        }

        let now = Timestamp::new(self.clock.now_millis());
        self.participants.update_last_status(&name, now).await?;

        Ok(())
    }
}
