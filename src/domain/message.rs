//! Chat message entity, its value objects, and the visibility rule.

use thiserror::Error;

use super::{ParticipantName, Timestamp};

/// Pseudo-recipient meaning "all participants"
pub const BROADCAST_TARGET: &str = "Todos";

/// Body of the system-generated join notice
pub const JOINED_TEXT: &str = "entra na sala...";

/// Body of the system-generated departure notice
pub const LEFT_TEXT: &str = "sai da sala...";

/// Error raised when message text fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageTextError {
    #[error("message text must not be empty")]
    Empty,
}

/// Non-empty message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(text: String) -> Result<Self, MessageTextError> {
        if text.trim().is_empty() {
            return Err(MessageTextError::Empty);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Message kind, fixed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Broadcast chat message, visible to everyone
    Message,
    /// Direct message, visible to sender and recipient only
    PrivateMessage,
    /// System-generated join/leave notice
    Status,
}

impl MessageKind {
    /// Wire name of this kind (`message`, `private_message`, `status`)
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Message => "message",
            MessageKind::PrivateMessage => "private_message",
            MessageKind::Status => "status",
        }
    }

    /// Whether users may submit this kind themselves. `status` messages
    /// are system-generated only.
    pub fn is_user_submittable(&self) -> bool {
        matches!(self, MessageKind::Message | MessageKind::PrivateMessage)
    }
}

impl std::str::FromStr for MessageKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(MessageKind::Message),
            "private_message" => Ok(MessageKind::PrivateMessage),
            "status" => Ok(MessageKind::Status),
            _ => Err(()),
        }
    }
}

/// An immutable chat log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sender name
    pub from: ParticipantName,
    /// Recipient name, or [`BROADCAST_TARGET`]
    pub to: String,
    /// Message body
    pub text: MessageText,
    /// Message kind
    pub kind: MessageKind,
    /// Creation timestamp, defines retrieval order
    pub sent_at: Timestamp,
}

impl ChatMessage {
    pub fn new(
        from: ParticipantName,
        to: String,
        text: MessageText,
        kind: MessageKind,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            from,
            to,
            text,
            kind,
            sent_at,
        }
    }

    /// System notice announcing that a participant entered the room.
    pub fn joined(name: ParticipantName, sent_at: Timestamp) -> Self {
        Self::status(name, JOINED_TEXT, sent_at)
    }

    /// System notice announcing that a participant left the room.
    pub fn left(name: ParticipantName, sent_at: Timestamp) -> Self {
        Self::status(name, LEFT_TEXT, sent_at)
    }

    fn status(name: ParticipantName, text: &str, sent_at: Timestamp) -> Self {
        // JOINED_TEXT / LEFT_TEXT are non-empty constants
        let text = MessageText::new(text.to_string()).expect("status text is non-empty");
        Self::new(
            name,
            BROADCAST_TARGET.to_string(),
            text,
            MessageKind::Status,
            sent_at,
        )
    }

    /// Whether `user` may see this message when polling the log: own
    /// messages, messages addressed to them, broadcast chat messages, and
    /// anything sent to [`BROADCAST_TARGET`].
    pub fn visible_to(&self, user: &ParticipantName) -> bool {
        self.from == *user
            || self.to == user.as_str()
            || self.kind == MessageKind::Message
            || self.to == BROADCAST_TARGET
    }
}
