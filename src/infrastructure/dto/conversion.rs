//! Domain model → DTO conversions.

use crate::common::time::format_wall_clock;
use crate::domain::{ChatMessage, Participant};

use super::http::{MessageDto, ParticipantDto};

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.as_str().to_string(),
            last_status: participant.last_status.value(),
        }
    }
}

impl From<ChatMessage> for MessageDto {
    fn from(message: ChatMessage) -> Self {
        Self {
            from: message.from.as_str().to_string(),
            to: message.to.clone(),
            text: message.text.as_str().to_string(),
            kind: message.kind.as_str().to_string(),
            time: format_wall_clock(message.sent_at.value()),
        }
    }
}
